/// Absolute tolerance for lengths and coordinates.
pub(crate) const LENGTH_EPSILON: f64 = 1e-9;

/// Relative tolerance for the collinearity test (cross product against |a||b|).
pub(crate) const COLLINEAR_EPSILON: f64 = 1e-9;

pub(crate) fn approx_zero(v: f64) -> bool {
    v.abs() <= LENGTH_EPSILON
}

/// Clamp a reveal fraction into `[0, 1]`; NaN collapses to `0`.
pub(crate) fn clamp_portion(portion: f64) -> f64 {
    if portion.is_nan() {
        return 0.0;
    }
    portion.clamp(0.0, 1.0)
}

/// Format a number for SVG attribute output: three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
