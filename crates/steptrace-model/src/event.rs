use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Point, PointPair};

/// One step of the closest-pair recursion, in exact execution order.
///
/// The engine emits splits and base cases pre-order and the final result
/// post-order; consumers may rely on that order being reproducible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClosestPairEvent {
    /// A slice was divided at `boundary_x`; the boundary point belongs to `right`.
    Split {
        boundary_x: f64,
        left: Vec<Point>,
        right: Vec<Point>,
    },
    /// Brackets a base-case scan: emitted with `best = INFINITY` before the
    /// pairwise comparisons and again with the final minimum after them.
    BruteForce { points: Vec<Point>, best: f64 },
    /// A single pairwise distance computation (base case or strip scan).
    Compare { pair: PointPair, distance: f64 },
    /// The strip around `boundary_x`, sorted by `y`. Emitted once before the
    /// scan and again each time the running best improves.
    Strip {
        boundary_x: f64,
        points: Vec<Point>,
        best_pair: Option<PointPair>,
        best: f64,
    },
    /// Emitted exactly once, at top level, after the computation completes.
    Result {
        pair: Option<PointPair>,
        distance: f64,
    },
}

impl fmt::Display for ClosestPairEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosestPairEvent::Split {
                boundary_x,
                left,
                right,
            } => write!(
                f,
                "split at x={boundary_x}: {} left / {} right",
                left.len(),
                right.len()
            ),
            ClosestPairEvent::BruteForce { points, best } => {
                write!(f, "brute force over {} points, best {best}", points.len())
            }
            ClosestPairEvent::Compare { pair, distance } => {
                write!(f, "compare {pair}: distance {distance}")
            }
            ClosestPairEvent::Strip {
                boundary_x,
                points,
                best,
                ..
            } => write!(
                f,
                "strip at x={boundary_x}: {} candidates, best {best}",
                points.len()
            ),
            ClosestPairEvent::Result { pair, distance } => match pair {
                Some(pair) => write!(f, "result: {pair}, distance {distance}"),
                None => write!(f, "result: no pair, distance {distance}"),
            },
        }
    }
}

/// One step of the Karatsuba recursion.
///
/// For every non-base node the stream is `Split`, then the full event
/// subsequences of z0, z2 and z1 in that order, then `Combine`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KaratsubaEvent {
    /// Single-digit base case: `product = x * y` computed directly.
    Base {
        #[serde(with = "decimal")]
        x: BigUint,
        #[serde(with = "decimal")]
        y: BigUint,
        #[serde(with = "decimal")]
        product: BigUint,
    },
    /// Both operands were split by the same power of ten.
    Split {
        #[serde(with = "decimal")]
        x: BigUint,
        #[serde(with = "decimal")]
        y: BigUint,
        #[serde(with = "decimal")]
        high_x: BigUint,
        #[serde(with = "decimal")]
        low_x: BigUint,
        #[serde(with = "decimal")]
        high_y: BigUint,
        #[serde(with = "decimal")]
        low_y: BigUint,
    },
    /// Recombination: `product = z2·10^(2m) + (z1 − z2 − z0)·10^m + z0`.
    Combine {
        #[serde(with = "decimal")]
        z0: BigUint,
        #[serde(with = "decimal")]
        z1: BigUint,
        #[serde(with = "decimal")]
        z2: BigUint,
        #[serde(with = "decimal")]
        product: BigUint,
    },
}

impl fmt::Display for KaratsubaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KaratsubaEvent::Base { x, y, product } => write!(f, "base: {x} * {y} = {product}"),
            KaratsubaEvent::Split {
                x,
                y,
                high_x,
                low_x,
                high_y,
                low_y,
            } => write!(
                f,
                "split {x} -> ({high_x}, {low_x}), {y} -> ({high_y}, {low_y})"
            ),
            KaratsubaEvent::Combine { z0, z1, z2, product } => {
                write!(f, "combine z0={z0} z1={z1} z2={z2} -> {product}")
            }
        }
    }
}

/// Serialize `BigUint` fields as decimal strings rather than limb arrays, so
/// JSON payloads stay readable and renderer-friendly for operands of any size.
mod decimal {
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<BigUint>().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn closest_pair_events_use_tagged_layout() {
        let event = ClosestPairEvent::Compare {
            pair: PointPair::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            distance: 5.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "compare");
        assert_eq!(json["distance"], 5.0);
        assert_eq!(json["pair"]["a"]["x"], 0.0);
    }

    #[test]
    fn karatsuba_events_serialize_biguints_as_decimal_strings() {
        let event = KaratsubaEvent::Base {
            x: BigUint::from(7u32),
            y: BigUint::from(8u32),
            product: BigUint::from(56u32),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "base");
        assert_eq!(json["x"], "7");
        assert_eq!(json["product"], "56");
    }

    #[test]
    fn karatsuba_events_round_trip_through_json() {
        let event = KaratsubaEvent::Split {
            x: "123456789012345678901234567890".parse().unwrap(),
            y: BigUint::from(98765u32),
            high_x: BigUint::from(12345u32),
            low_x: BigUint::from(67890u32),
            high_y: BigUint::from(9u32),
            low_y: BigUint::from(8765u32),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: KaratsubaEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
