use crate::{
    foundation::core::{Point, point_is_finite},
    foundation::error::{StrokeError, StrokeResult},
    geometry::{path_data::parse_outline, points::path_length},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawStroke")]
/// One brush stroke of a glyph.
///
/// The stroke is read-only input: its outline, centerline, and length are computed upstream
/// and never modified by the renderer.
pub struct Stroke {
    /// Filled outline of the stroke as SVG path data.
    pub path: String,
    /// Centerline points in drawing order.
    pub points: Vec<Point>,
    /// Total arc length of the centerline.
    pub length: f64,
    /// Whether the stroke belongs to the glyph's highlighted radical.
    pub is_in_radical: bool,
    /// Index of the stroke within its glyph.
    pub stroke_num: usize,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStroke {
    path: String,
    points: Vec<Point>,
    #[serde(default)]
    length: Option<f64>,
    #[serde(default, alias = "is_in_radical")]
    is_in_radical: bool,
    #[serde(default, alias = "stroke_num")]
    stroke_num: usize,
}

impl From<RawStroke> for Stroke {
    fn from(raw: RawStroke) -> Self {
        let length = raw.length.unwrap_or_else(|| path_length(&raw.points));
        Self {
            path: raw.path,
            points: raw.points,
            length,
            is_in_radical: raw.is_in_radical,
            stroke_num: raw.stroke_num,
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterData {
    strokes: Vec<String>,
    medians: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    rad_strokes: Vec<usize>,
}

impl Stroke {
    /// Build a stroke whose length is the polyline length of `points`.
    pub fn new(path: impl Into<String>, points: Vec<Point>, is_in_radical: bool) -> Self {
        let length = path_length(&points);
        Self {
            path: path.into(),
            points,
            length,
            is_in_radical,
            stroke_num: 0,
        }
    }

    /// Override the precomputed length.
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// First centerline point, if any.
    pub fn starting_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last centerline point, if any.
    pub fn ending_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Reject non-finite geometry, a negative length, or an unparseable outline.
    pub fn validate(&self) -> StrokeResult<()> {
        if let Some(idx) = self.points.iter().position(|p| !point_is_finite(*p)) {
            return Err(StrokeError::validation(format!(
                "stroke {} point {idx} is not finite",
                self.stroke_num
            )));
        }
        if !self.length.is_finite() || self.length < 0.0 {
            return Err(StrokeError::validation(format!(
                "stroke {} length must be finite and >= 0 (got {})",
                self.stroke_num, self.length
            )));
        }
        if !self.path.trim().is_empty() && parse_outline(&self.path).is_none() {
            return Err(StrokeError::validation(format!(
                "stroke {} outline is not valid SVG path data",
                self.stroke_num
            )));
        }
        Ok(())
    }

    /// Parse a single stroke from JSON (`path`, `points`, optional `length`, `isInRadical`).
    pub fn from_json_str(json: &str) -> StrokeResult<Self> {
        let stroke: Stroke = serde_json::from_str(json)?;
        stroke.validate()?;
        Ok(stroke)
    }

    /// Extract stroke `stroke_num` from a character-data document.
    ///
    /// The document carries parallel `strokes` (outline path data) and `medians`
    /// (centerline `[x, y]` pairs) arrays, plus `radStrokes` listing the indices that belong
    /// to the radical.
    pub fn from_character_json(json: &str, stroke_num: usize) -> StrokeResult<Self> {
        let data: CharacterData = serde_json::from_str(json)?;
        if data.strokes.len() != data.medians.len() {
            return Err(StrokeError::validation(format!(
                "character data has {} strokes but {} medians",
                data.strokes.len(),
                data.medians.len()
            )));
        }

        let (Some(path), Some(median)) =
            (data.strokes.get(stroke_num), data.medians.get(stroke_num))
        else {
            return Err(StrokeError::validation(format!(
                "stroke index {stroke_num} out of range (character has {} strokes)",
                data.strokes.len()
            )));
        };

        let points = median.iter().map(|&[x, y]| Point::new(x, y)).collect();
        let mut stroke = Stroke::new(path.clone(), points, data.rad_strokes.contains(&stroke_num));
        stroke.stroke_num = stroke_num;
        stroke.validate()?;
        Ok(stroke)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/model.rs"]
mod tests;
