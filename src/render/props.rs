use crate::{
    foundation::error::{StrokeError, StrokeResult},
    stroke::model::Stroke,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Properties supplied by the animation driver for one frame.
pub struct RenderProps {
    /// Revealed fraction of the stroke, `0` (nothing) to `1` (all).
    pub display_portion: f64,
    /// Fill and outline color.
    pub stroke_color: String,
    /// Color for strokes in the radical; empty or `None` falls back to `stroke_color`.
    #[serde(default)]
    pub radical_color: Option<String>,
    /// Outline width of the visible drawable.
    pub stroke_width: f64,
    /// Opacity of the visible drawable, `0` to `1`.
    pub opacity: f64,
}

impl Default for RenderProps {
    fn default() -> Self {
        Self {
            display_portion: 0.0,
            stroke_color: "#555".to_string(),
            radical_color: None,
            stroke_width: 2.0,
            opacity: 1.0,
        }
    }
}

impl RenderProps {
    /// Color `stroke` should be painted with under these properties.
    pub fn effective_color<'a>(&'a self, stroke: &Stroke) -> &'a str {
        self.effective_color_for(stroke.is_in_radical)
    }

    pub(crate) fn effective_color_for(&self, is_in_radical: bool) -> &str {
        match self.radical_color.as_deref() {
            Some(radical) if is_in_radical && !radical.is_empty() => radical,
            _ => &self.stroke_color,
        }
    }

    /// Reject non-finite widths and opacities.
    pub fn validate(&self) -> StrokeResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(StrokeError::validation(format!(
                "stroke_width must be finite and >= 0 (got {})",
                self.stroke_width
            )));
        }
        if !self.opacity.is_finite() {
            return Err(StrokeError::validation("opacity must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/props.rs"]
mod tests;
