//! Stroke surface component: options, per-frame properties, and the renderer itself.

/// Mount-time configuration.
pub mod options;
/// Per-frame property bag.
pub mod props;
/// The stroke renderer and its lifecycle trait.
pub mod renderer;
