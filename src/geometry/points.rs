//! Point extension helpers and polyline length.

use crate::foundation::{
    core::{Point, Vec2},
    math::approx_zero,
};

/// Total arc length of a polyline; `0` for fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Move `p2` further along the direction `p1 -> p2` by `distance`.
///
/// A negative `distance` pulls `p2` back towards `p1`. Coincident points have no direction,
/// so `p2` is returned unchanged.
pub fn extend_point_along_line(p1: Point, p2: Point, distance: f64) -> Point {
    let dir: Vec2 = p2 - p1;
    let len = dir.hypot();
    if approx_zero(len) {
        return p2;
    }
    p2 + dir * (distance / len)
}

/// Push the first point of `points` outward (away from the second point) by `distance`.
///
/// Sequences shorter than two points are returned unchanged.
pub fn extend_start(points: &[Point], distance: f64) -> Vec<Point> {
    let mut out = points.to_vec();
    if out.len() < 2 {
        return out;
    }
    out[0] = extend_point_along_line(points[1], points[0], distance);
    out
}

/// Push the last point of `points` outward (away from the second-to-last point) by `distance`.
///
/// Sequences shorter than two points are returned unchanged.
pub fn extend_end(points: &[Point], distance: f64) -> Vec<Point> {
    let mut out = points.to_vec();
    let n = out.len();
    if n < 2 {
        return out;
    }
    out[n - 1] = extend_point_along_line(points[n - 2], points[n - 1], distance);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/points.rs"]
mod tests;
