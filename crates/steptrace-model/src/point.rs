use serde::{Deserialize, Serialize};
use std::fmt;

/// A planar point with finite real coordinates.
///
/// Ordering throughout the closest-pair engine is by `x` via a *stable* sort,
/// so points with equal `x` keep their input order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A pair of points, stored in the order the scan discovered them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointPair {
    pub a: Point,
    pub b: Point,
}

impl PointPair {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Euclidean distance between the two points.
    pub fn distance(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

impl fmt::Display for PointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.a, self.b)
    }
}

/// Final result of a closest-pair run.
///
/// `distance` is `f64::INFINITY` when no pair exists (fewer than two points).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosestPair {
    pub pair: Option<PointPair>,
    pub distance: f64,
}

impl ClosestPair {
    /// The degenerate result for point sets with fewer than two points.
    pub fn none() -> Self {
        Self {
            pair: None,
            distance: f64::INFINITY,
        }
    }
}

impl fmt::Display for ClosestPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pair {
            Some(pair) => write!(f, "{} (distance {})", pair, self.distance),
            None => write!(f, "no pair (fewer than two points)"),
        }
    }
}
