/// Convenience result type used across the crate.
pub type StrokeResult<T> = Result<T, StrokeError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for stroke loading, masking, and surface mutation.
pub enum StrokeError {
    /// Input or configuration validation failure.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry that cannot be turned into a mask.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Drawing-surface failure (unknown node, detached parent, ...).
    #[error("surface error: {0}")]
    Surface(String),

    /// Rasterization or SVG re-parse failure.
    #[error("render error: {0}")]
    Render(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StrokeError::Surface`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`StrokeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StrokeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StrokeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
