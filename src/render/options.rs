use crate::{
    foundation::error::{StrokeError, StrokeResult},
    geometry::polygon::DEFAULT_MITER_LIMIT,
};

/// Default width of the mask stroke, in glyph units.
pub const DEFAULT_MASK_WIDTH: f64 = 200.0;

/// Default near-unity factor applied to the dash offset.
pub const DEFAULT_DASH_SEAM_FACTOR: f64 = 0.999;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Renderer configuration, fixed for the lifetime of one mounted renderer.
pub struct RenderOptions {
    /// Clip with a polygon outline instead of sliding a dash pattern.
    #[serde(alias = "usePolygonMasks")]
    pub use_polygon_masks: bool,
    /// Width of the mask stroke; must cover the widest part of the stroke outline.
    #[serde(alias = "maskWidth")]
    pub mask_width: f64,
    /// Factor in `(0, 1]` applied to the dash offset. Tune per drawing surface.
    #[serde(alias = "dashSeamFactor")]
    pub dash_seam_factor: f64,
    /// Polygon joins reaching further than this many half widths are bevelled.
    #[serde(alias = "miterLimit")]
    pub miter_limit: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_polygon_masks: false,
            mask_width: DEFAULT_MASK_WIDTH,
            dash_seam_factor: DEFAULT_DASH_SEAM_FACTOR,
            miter_limit: DEFAULT_MITER_LIMIT,
        }
    }
}

impl RenderOptions {
    /// Distance the mask centerline is pushed outward at its ends.
    pub fn half_width(&self) -> f64 {
        self.mask_width / 2.0
    }

    /// Parse options from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> StrokeResult<Self> {
        let opts: Self = serde_json::from_str(json)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check numeric ranges.
    pub fn validate(&self) -> StrokeResult<()> {
        if !self.mask_width.is_finite() || self.mask_width <= 0.0 {
            return Err(StrokeError::validation(format!(
                "mask_width must be finite and > 0 (got {})",
                self.mask_width
            )));
        }
        if !(self.dash_seam_factor > 0.0 && self.dash_seam_factor <= 1.0) {
            return Err(StrokeError::validation(format!(
                "dash_seam_factor must be in (0, 1] (got {})",
                self.dash_seam_factor
            )));
        }
        if !self.miter_limit.is_finite() || self.miter_limit < 1.0 {
            return Err(StrokeError::validation(format!(
                "miter_limit must be finite and >= 1 (got {})",
                self.miter_limit
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/options.rs"]
mod tests;
