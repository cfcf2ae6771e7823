use crate::foundation::{
    core::{Point, Vec2},
    math::LENGTH_EPSILON,
};

/// Miter length (in multiples of half the width) above which a join is bevelled.
pub const DEFAULT_MITER_LIMIT: f64 = 4.0;

/// Outline of `points` thickened to `width`, as a closed polygon.
///
/// See [`lines_to_polygon_with_limit`]; uses [`DEFAULT_MITER_LIMIT`].
pub fn lines_to_polygon(points: &[Point], width: f64) -> Vec<Point> {
    lines_to_polygon_with_limit(points, width, DEFAULT_MITER_LIMIT)
}

/// Outline of `points` thickened to `width`, as a closed polygon.
///
/// The outline walks the left side of the centerline forward and the right side backward,
/// with butt ends. Interior vertices get a miter join; when the miter would reach further
/// than `miter_limit * width / 2` the outer side is bevelled and the inner side is clamped to
/// that length. The inner corner never reaches past the far end cap of a neighbouring
/// segment: when the neighbour is shorter than the join, the corner slides along the longer
/// segment's inner edge to just beyond that cap. Consecutive duplicate points are ignored.
/// Fewer than two distinct points return the input unchanged.
pub fn lines_to_polygon_with_limit(points: &[Point], width: f64, miter_limit: f64) -> Vec<Point> {
    let pts = dedup_consecutive(points);
    if pts.len() < 2 {
        return points.to_vec();
    }

    let half = width / 2.0;
    let segments: Vec<Segment> = pts
        .windows(2)
        .map(|w| {
            let d = w[1] - w[0];
            let len = d.hypot();
            let dir = d / len;
            Segment { dir, normal: Vec2::new(-dir.y, dir.x), len }
        })
        .collect();

    let mut left = Vec::with_capacity(pts.len() + 2);
    let mut right = Vec::with_capacity(pts.len() + 2);
    left.push(pts[0] + segments[0].normal * half);
    right.push(pts[0] - segments[0].normal * half);

    for (i, &p) in pts.iter().enumerate().take(pts.len() - 1).skip(1) {
        let (incoming, outgoing) = (&segments[i - 1], &segments[i]);
        let (n0, n1) = (incoming.normal, outgoing.normal);
        let sum = n0 + n1;
        let cos = n0.dot(n1);

        if sum.hypot() <= LENGTH_EPSILON {
            // Full reversal: square the turn off on both sides.
            left.extend([p + n0 * half, p + n1 * half]);
            right.extend([p - n0 * half, p - n1 * half]);
            continue;
        }

        // Positive cross: the path turns towards the left normal, so the left side is inner.
        let turns_left = n0.cross(n1) > 0.0;
        let side = if turns_left { 1.0 } else { -1.0 };

        let ratio = (2.0 / (1.0 + cos)).sqrt();
        let bevelled = ratio > miter_limit;
        let miter = if bevelled {
            sum / sum.hypot() * (half * miter_limit)
        } else {
            sum * (half / (1.0 + cos))
        };

        let inner = inner_corner(p, p + miter * side, incoming, outgoing, side, half);
        let (inner_side, outer_side) = if turns_left {
            (&mut left, &mut right)
        } else {
            (&mut right, &mut left)
        };
        inner_side.push(inner);
        if bevelled {
            outer_side.extend([p - n0 * (half * side), p - n1 * (half * side)]);
        } else {
            outer_side.push(p - miter * side);
        }
    }

    let last = pts[pts.len() - 1];
    let n_last = segments[segments.len() - 1].normal;
    left.push(last + n_last * half);
    right.push(last - n_last * half);

    left.extend(right.into_iter().rev());
    left
}

struct Segment {
    dir: Vec2,
    normal: Vec2,
    len: f64,
}

/// Inner corner of the join at `p`, pulled back when `corner` lies past the far cap of
/// either neighbouring segment. `side` selects the normal that points at the inner side.
fn inner_corner(
    p: Point,
    corner: Point,
    incoming: &Segment,
    outgoing: &Segment,
    side: f64,
    half: f64,
) -> Point {
    let offset = corner - p;
    let reach_out = offset.dot(outgoing.dir);
    let reach_in = -offset.dot(incoming.dir);
    if reach_out <= outgoing.len && reach_in <= incoming.len {
        return corner;
    }

    let cos = incoming.dir.dot(outgoing.dir);
    if cos.abs() <= LENGTH_EPSILON {
        // Right angle: each inner edge runs parallel to the other segment's cap.
        return corner;
    }

    // Land just past the short neighbour's cap so the corner never sits on the cap itself.
    let margin = half * 1e-6;
    let in_normal = incoming.normal * side;
    let out_normal = outgoing.normal * side;
    if outgoing.len <= incoming.len {
        // Slide along the incoming inner edge until past the outgoing end cap.
        let t = (outgoing.len + margin - half * in_normal.dot(outgoing.dir)) / cos;
        p + in_normal * half + incoming.dir * t.clamp(-incoming.len, 0.0)
    } else {
        // Slide along the outgoing inner edge until past the incoming start cap.
        let t = -(incoming.len + margin + half * out_normal.dot(incoming.dir)) / cos;
        p + out_normal * half + outgoing.dir * t.clamp(0.0, outgoing.len)
    }
}

fn dedup_consecutive(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        match out.last() {
            Some(&prev) if prev.distance(p) <= LENGTH_EPSILON => {}
            _ => out.push(p),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/polygon.rs"]
mod tests;
