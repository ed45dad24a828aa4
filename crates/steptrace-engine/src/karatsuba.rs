//! Karatsuba multiplication over non-negative arbitrary-precision integers.
//!
//! The recursion order z0 (low halves), z2 (high halves), z1 (half sums) is
//! an observable contract of the trace: a non-traced direct computation might
//! pick another order, but the event stream must not.

use num_bigint::BigUint;
use num_integer::Integer;
use steptrace_model::KaratsubaEvent;

use crate::trace::{EventSink, NullSink, Trace};

/// Multiply two non-negative integers without producing events.
pub fn karatsuba(x: &BigUint, y: &BigUint) -> BigUint {
    match multiply(x.clone(), y.clone(), &mut NullSink) {
        Ok(product) => product,
        Err(interrupt) => match interrupt {},
    }
}

/// Multiply two non-negative integers, streaming every split, base case and
/// recombination as [`KaratsubaEvent`]s.
pub fn karatsuba_trace(x: BigUint, y: BigUint) -> Trace<KaratsubaEvent, BigUint> {
    Trace::spawn(move |sink| multiply(x, y, sink))
}

fn multiply<S: EventSink<KaratsubaEvent>>(
    x: BigUint,
    y: BigUint,
    sink: &mut S,
) -> Result<BigUint, S::Interrupt> {
    if is_single_digit(&x) || is_single_digit(&y) {
        let product = &x * &y;
        sink.emit(KaratsubaEvent::Base {
            x,
            y,
            product: product.clone(),
        })?;
        return Ok(product);
    }

    let n = decimal_digits(&x).max(decimal_digits(&y));
    let m = n / 2;
    let shift = pow10(m);
    let (high_x, low_x) = x.div_rem(&shift);
    let (high_y, low_y) = y.div_rem(&shift);

    sink.emit(KaratsubaEvent::Split {
        x,
        y,
        high_x: high_x.clone(),
        low_x: low_x.clone(),
        high_y: high_y.clone(),
        low_y: low_y.clone(),
    })?;

    let z0 = multiply(low_x.clone(), low_y.clone(), sink)?;
    let z2 = multiply(high_x.clone(), high_y.clone(), sink)?;
    let z1 = multiply(low_x + high_x, low_y + high_y, sink)?;

    // z1 = z0 + z2 + low_x*high_y + high_x*low_y, so this never underflows.
    let middle = &z1 - &z2 - &z0;
    let product = &z2 * pow10(2 * m) + middle * shift + &z0;

    sink.emit(KaratsubaEvent::Combine {
        z0,
        z1,
        z2,
        product: product.clone(),
    })?;
    Ok(product)
}

fn is_single_digit(value: &BigUint) -> bool {
    *value < BigUint::from(10u32)
}

/// Digit count of the exact decimal representation; `0` has one digit.
fn decimal_digits(value: &BigUint) -> u32 {
    value.to_str_radix(10).len() as u32
}

fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(digits: &str) -> BigUint {
        digits.parse().unwrap()
    }

    #[test]
    fn single_digit_operands_multiply_directly() {
        assert_eq!(karatsuba(&int("7"), &int("8")), int("56"));
        assert_eq!(karatsuba(&int("0"), &int("9")), int("0"));
        assert_eq!(karatsuba(&int("9"), &int("9")), int("81"));
    }

    #[test]
    fn zero_times_anything_is_zero() {
        assert_eq!(karatsuba(&int("0"), &int("123456789")), int("0"));
        assert_eq!(karatsuba(&int("987654321"), &int("0")), int("0"));
    }

    #[test]
    fn textbook_example() {
        assert_eq!(karatsuba(&int("12"), &int("34")), int("408"));
    }

    #[test]
    fn uneven_digit_counts() {
        let x = int("12345");
        let y = int("67");
        assert_eq!(karatsuba(&x, &y), &x * &y);
    }

    #[test]
    fn digit_count_is_exact() {
        assert_eq!(decimal_digits(&int("0")), 1);
        assert_eq!(decimal_digits(&int("9")), 1);
        assert_eq!(decimal_digits(&int("10")), 2);
        assert_eq!(decimal_digits(&int("1000000")), 7);
    }
}
