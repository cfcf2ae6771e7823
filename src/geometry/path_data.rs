use crate::foundation::{core::Point, math::fmt_num};

/// SVG path data (`d` attribute) for a polyline: `M x y L x y ...`, with ` Z` when `close`.
///
/// An empty sequence yields an empty string.
pub fn points_to_path_data(points: &[Point], close: bool) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", fmt_num(first.x), fmt_num(first.y));
    for p in rest {
        d.push_str(&format!(" L {} {}", fmt_num(p.x), fmt_num(p.y)));
    }
    if close {
        d.push_str(" Z");
    }
    d
}

/// Parse an SVG path outline, rejecting malformed data.
pub fn parse_outline(d: &str) -> Option<kurbo::BezPath> {
    kurbo::BezPath::from_svg(d).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path_data.rs"]
mod tests;
