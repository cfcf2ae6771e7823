//! Reveal masks: how much of the stroke is currently visible.

/// Dash-offset mask.
pub mod dash;
/// Polygon clip mask.
pub mod polygon;

use crate::{
    foundation::{core::Point, error::StrokeResult},
    geometry::{
        filter::filter_parallel_points,
        points::{extend_end, extend_start},
    },
    surface::{DrawingSurface, NodeId},
};

pub use dash::DashMask;
pub use polygon::PolygonMask;

/// Centerline prepared for masking: collinear points filtered, start pushed outward by
/// `half_width`, and the end too when `extend_tail` is set.
pub fn extended_mask_points(points: &[Point], half_width: f64, extend_tail: bool) -> Vec<Point> {
    let extended = extend_start(&filter_parallel_points(points), half_width);
    if extend_tail {
        extend_end(&extended, half_width)
    } else {
        extended
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which masking technique a renderer uses.
pub enum MaskKind {
    /// Dash pattern slid along a thick mask path.
    DashOffset,
    /// Polygon outline of the revealed prefix plus a round tip.
    PolygonClip,
}

#[derive(Clone, Debug)]
/// The active mask of one renderer, chosen once at mount.
pub enum MaskStrategy {
    /// See [`DashMask`].
    DashOffset(DashMask),
    /// See [`PolygonMask`].
    PolygonClip(PolygonMask),
}

impl MaskStrategy {
    /// Technique in use.
    pub fn kind(&self) -> MaskKind {
        match self {
            Self::DashOffset(_) => MaskKind::DashOffset,
            Self::PolygonClip(_) => MaskKind::PolygonClip,
        }
    }

    /// Mask or clip-path container element.
    pub fn container(&self) -> NodeId {
        match self {
            Self::DashOffset(m) => m.container(),
            Self::PolygonClip(m) => m.container(),
        }
    }

    /// Attribute the masked drawable references the container through.
    pub fn reference_attr(&self) -> &'static str {
        match self {
            Self::DashOffset(_) => "mask",
            Self::PolygonClip(_) => "clip-path",
        }
    }

    /// Reveal `portion` (already clamped into `[0, 1]`) of the stroke.
    pub fn update_portion<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        portion: f64,
    ) -> StrokeResult<()> {
        match self {
            Self::DashOffset(m) => m.update_portion(surface, portion),
            Self::PolygonClip(m) => m.update_portion(surface, portion),
        }
    }

    /// Remove the container; its shapes go with it as one subtree.
    pub fn teardown<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> StrokeResult<()> {
        surface.remove(self.container())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/mod.rs"]
mod tests;
