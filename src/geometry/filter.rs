use crate::foundation::{core::Point, math::COLLINEAR_EPSILON};

/// Drop interior points that sit on the straight run between their neighbours.
///
/// A point is dropped when the segment leading into it continues in the same direction
/// as the segment leaving it (cross product within tolerance, non-negative dot product),
/// so runs of collinear points collapse to their two ends. Zero-length segments also
/// collapse. The first and last points are always kept. A stroke that doubles back on
/// itself keeps its turning point.
pub fn filter_parallel_points(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut filtered: Vec<Point> = Vec::with_capacity(points.len());
    filtered.extend_from_slice(&points[..2]);

    for &point in &points[2..] {
        let n = filtered.len();
        let prev = filtered[n - 1] - filtered[n - 2];
        let cur = point - filtered[n - 1];
        if continues_straight(prev, cur) {
            filtered.pop();
        }
        filtered.push(point);
    }

    filtered
}

fn continues_straight(prev: kurbo::Vec2, cur: kurbo::Vec2) -> bool {
    let scale = prev.hypot() * cur.hypot();
    if scale == 0.0 {
        return true;
    }
    prev.cross(cur).abs() <= COLLINEAR_EPSILON * scale && prev.dot(cur) >= 0.0
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/filter.rs"]
mod tests;
