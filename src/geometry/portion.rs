use crate::foundation::{
    core::Point,
    math::{approx_zero, clamp_portion},
};

use super::points::path_length;

/// Prefix of a polyline covering `fraction` of its total arc length.
///
/// The result holds every vertex strictly before the cut plus one interpolated point exactly
/// at the cut. `fraction <= 0` keeps only the first point, `fraction >= 1` returns the whole
/// polyline. Inputs with fewer than two points, or with zero total length, are returned
/// unchanged. Growing `fraction` never drops a vertex that an earlier call returned.
pub fn line_segments_portion(points: &[Point], fraction: f64) -> Vec<Point> {
    let fraction = clamp_portion(fraction);
    if points.len() < 2 || fraction >= 1.0 {
        return points.to_vec();
    }
    if fraction == 0.0 {
        return vec![points[0]];
    }

    let total = path_length(points);
    if approx_zero(total) {
        return points.to_vec();
    }

    let target = total * fraction;
    let mut travelled = 0.0;
    for (i, seg) in points.windows(2).enumerate() {
        let (start, end) = (seg[0], seg[1]);
        let seg_len = start.distance(end);
        if seg_len > 0.0 && travelled + seg_len >= target {
            let t = ((target - travelled) / seg_len).clamp(0.0, 1.0);
            let mut out = points[..=i].to_vec();
            out.push(start.lerp(end, t));
            return out;
        }
        travelled += seg_len;
    }

    // Rounding left the target a hair past the accumulated length.
    points.to_vec()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/portion.rs"]
mod tests;
