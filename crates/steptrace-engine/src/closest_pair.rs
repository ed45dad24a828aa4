//! Closest pair of points, divide and conquer on the median x-coordinate.
//!
//! Behavior notes that fix the event stream bit-for-bit:
//! - the single x-sort is stable, so tied x-coordinates keep input order;
//! - base-case pairs are scanned in index order and ties keep the first pair
//!   found (strict `<`);
//! - the left half is fully solved (all nested events delivered) before the
//!   right half begins, and an exact left/right tie keeps the left result;
//! - the strip is rebuilt from the full current slice against the running
//!   bound, and its early exit uses the current, possibly already shrunk,
//!   minimum.

use steptrace_model::{ClosestPair, ClosestPairEvent, Point, PointPair};

use crate::trace::{EventSink, NullSink, Trace};

/// Compute the closest pair without producing events.
///
/// Returns [`ClosestPair::none`] for fewer than two points.
pub fn closest_pair(points: &[Point]) -> ClosestPair {
    match solve(points.to_vec(), &mut NullSink) {
        Ok(result) => result,
        Err(interrupt) => match interrupt {},
    }
}

/// Compute the closest pair, streaming every split, comparison and strip
/// refinement as [`ClosestPairEvent`]s.
pub fn closest_pair_trace(points: Vec<Point>) -> Trace<ClosestPairEvent, ClosestPair> {
    Trace::spawn(move |sink| solve(points, sink))
}

fn solve<S: EventSink<ClosestPairEvent>>(
    points: Vec<Point>,
    sink: &mut S,
) -> Result<ClosestPair, S::Interrupt> {
    if points.len() < 2 {
        sink.emit(ClosestPairEvent::Result {
            pair: None,
            distance: f64::INFINITY,
        })?;
        return Ok(ClosestPair::none());
    }

    let mut sorted = points;
    // Stable sort; `total_cmp` is a total order and agrees with `<` on the
    // finite coordinates the contract guarantees.
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let (pair, distance) = recurse(&sorted, sink)?;
    sink.emit(ClosestPairEvent::Result { pair, distance })?;
    Ok(ClosestPair { pair, distance })
}

fn recurse<S: EventSink<ClosestPairEvent>>(
    pts: &[Point],
    sink: &mut S,
) -> Result<(Option<PointPair>, f64), S::Interrupt> {
    let n = pts.len();
    if n <= 3 {
        return brute_force(pts, sink);
    }

    let mid = n / 2;
    let boundary_x = pts[mid].x;
    // The boundary point belongs to the right half.
    let (left, right) = pts.split_at(mid);
    sink.emit(ClosestPairEvent::Split {
        boundary_x,
        left: left.to_vec(),
        right: right.to_vec(),
    })?;

    let (left_pair, left_dist) = recurse(left, sink)?;
    let (right_pair, right_dist) = recurse(right, sink)?;

    // Exact ties keep the left result.
    let (mut best_pair, mut min_dist) = if left_dist <= right_dist {
        (left_pair, left_dist)
    } else {
        (right_pair, right_dist)
    };

    // Candidates for a cross-boundary pair: strictly within the running bound
    // of the dividing line, drawn from the whole current slice.
    let mut strip: Vec<Point> = pts
        .iter()
        .copied()
        .filter(|p| (p.x - boundary_x).abs() < min_dist)
        .collect();
    strip.sort_by(|a, b| a.y.total_cmp(&b.y));

    if strip.len() > 1 {
        sink.emit(ClosestPairEvent::Strip {
            boundary_x,
            points: strip.clone(),
            best_pair,
            best: min_dist,
        })?;
    }

    for i in 0..strip.len() {
        // At most 7 subsequent points in y-order can still be closer.
        for j in i + 1..strip.len().min(i + 8) {
            if strip[j].y - strip[i].y >= min_dist {
                break;
            }
            let pair = PointPair::new(strip[i], strip[j]);
            let distance = pair.distance();
            sink.emit(ClosestPairEvent::Compare { pair, distance })?;
            if distance < min_dist {
                min_dist = distance;
                best_pair = Some(pair);
                sink.emit(ClosestPairEvent::Strip {
                    boundary_x,
                    points: strip.clone(),
                    best_pair,
                    best: min_dist,
                })?;
            }
        }
    }

    Ok((best_pair, min_dist))
}

fn brute_force<S: EventSink<ClosestPairEvent>>(
    pts: &[Point],
    sink: &mut S,
) -> Result<(Option<PointPair>, f64), S::Interrupt> {
    let mut best_pair = None;
    let mut min_dist = f64::INFINITY;

    if pts.len() > 1 {
        sink.emit(ClosestPairEvent::BruteForce {
            points: pts.to_vec(),
            best: f64::INFINITY,
        })?;
    }

    for i in 0..pts.len() {
        for j in i + 1..pts.len() {
            let pair = PointPair::new(pts[i], pts[j]);
            let distance = pair.distance();
            sink.emit(ClosestPairEvent::Compare { pair, distance })?;
            // Strict `<`: ties keep the first pair found.
            if distance < min_dist {
                min_dist = distance;
                best_pair = Some(pair);
            }
        }
    }

    if pts.len() > 1 {
        sink.emit(ClosestPairEvent::BruteForce {
            points: pts.to_vec(),
            best: min_dist,
        })?;
    }

    Ok((best_pair, min_dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_and_single_point_sets_have_no_pair() {
        assert_eq!(closest_pair(&[]), ClosestPair::none());
        assert_eq!(closest_pair(&pts(&[(1.0, 2.0)])), ClosestPair::none());
    }

    #[test]
    fn two_points_form_the_only_pair() {
        let result = closest_pair(&pts(&[(0.0, 0.0), (3.0, 4.0)]));
        assert_eq!(result.distance, 5.0);
        assert_eq!(
            result.pair,
            Some(PointPair::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0)))
        );
    }

    #[test]
    fn duplicate_points_yield_zero_distance() {
        let result = closest_pair(&pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]));
        assert_eq!(result.distance, 0.0);
        assert_eq!(
            result.pair,
            Some(PointPair::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0)))
        );
    }

    #[test]
    fn collinear_points_are_handled_like_any_other() {
        let result = closest_pair(&pts(&[(0.0, 0.0), (10.0, 0.0), (13.0, 0.0), (20.0, 0.0)]));
        assert_eq!(result.distance, 3.0);
    }

    #[test]
    fn input_order_does_not_change_the_distance() {
        let forward = pts(&[(0.0, 0.0), (1.0, 1.0), (4.0, 0.5), (7.0, 7.0), (9.0, 1.0)]);
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(
            closest_pair(&forward).distance,
            closest_pair(&reversed).distance
        );
    }
}
