use num_bigint::BigUint;
use thiserror::Error;

/// Rejected multiplication operand.
///
/// The engines assume pre-validated input; this is the boundary where text
/// from a driver becomes a [`BigUint`] or is turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOperand {
    #[error("operand is empty")]
    Empty,
    #[error("operand is negative; only non-negative integers are supported")]
    Negative,
    #[error("operand contains non-digit character '{ch}'")]
    NonDigit { ch: char },
}

/// Parse a non-negative integer operand from its decimal representation.
///
/// Accepts any run of ASCII digits (surrounding whitespace is trimmed).
/// Signs are rejected, including `+`: the decimal form is expected to be
/// unambiguous apart from `"0"` itself.
pub fn parse_operand(text: &str) -> Result<BigUint, InvalidOperand> {
    let digits = text.trim();
    if digits.is_empty() {
        return Err(InvalidOperand::Empty);
    }
    if let Some(rest) = digits.strip_prefix('-') {
        if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidOperand::Negative);
        }
    }
    if let Some(ch) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(InvalidOperand::NonDigit { ch });
    }
    // All-digit input always parses; the error arm is unreachable.
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(InvalidOperand::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_plain_digits() {
        assert_eq!(parse_operand("0"), Ok(BigUint::from(0u32)));
        assert_eq!(parse_operand("12"), Ok(BigUint::from(12u32)));
        assert_eq!(parse_operand("  34 \n"), Ok(BigUint::from(34u32)));
    }

    #[test]
    fn accepts_long_digit_strings() {
        let digits = "9".repeat(300);
        let value = parse_operand(&digits).unwrap();
        assert_eq!(value.to_str_radix(10), digits);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(parse_operand(""), Err(InvalidOperand::Empty));
        assert_eq!(parse_operand("   \n"), Err(InvalidOperand::Empty));
    }

    #[test]
    fn rejects_negative_numbers() {
        assert_eq!(parse_operand("-5"), Err(InvalidOperand::Negative));
        assert_eq!(parse_operand("-123456789"), Err(InvalidOperand::Negative));
    }

    #[test]
    fn rejects_signs_and_stray_characters() {
        assert_eq!(
            parse_operand("+5"),
            Err(InvalidOperand::NonDigit { ch: '+' })
        );
        assert_eq!(
            parse_operand("12a"),
            Err(InvalidOperand::NonDigit { ch: 'a' })
        );
        assert_eq!(
            parse_operand("1 2"),
            Err(InvalidOperand::NonDigit { ch: ' ' })
        );
        assert_eq!(
            parse_operand("-"),
            Err(InvalidOperand::NonDigit { ch: '-' })
        );
    }
}
