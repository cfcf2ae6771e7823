//! Progressive reveal of a single glyph stroke.
//!
//! A stroke is an SVG outline plus the centerline it was drawn along. Rendering it
//! "partially" means hiding everything past a fraction of the centerline's arc length behind a
//! mask, and sliding that fraction from `0` to `1` over an animation.
//!
//! # Pieces
//!
//! 1. **Geometry**: pure functions over point sequences ([`extend_point_along_line`],
//!    [`filter_parallel_points`], [`line_segments_portion`], [`lines_to_polygon`]).
//! 2. **Masks**: [`MaskStrategy`] is either a [`DashMask`] (one dash slid along a thick path)
//!    or a [`PolygonMask`] (outline of the revealed prefix plus a round tip).
//! 3. **Renderer**: [`StrokeRenderer`] mounts the visible path and its mask on a
//!    [`DrawingSurface`], applies per-frame [`RenderProps`] as deltas, and tears down once.
//!
//! [`SvgDocument`] is the bundled surface: an in-memory SVG tree that serializes to markup and
//! rasterizes through `resvg`.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: every call completes synchronously; renderers own their elements.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod geometry;

/// Reveal masks.
pub mod mask;
/// Stroke renderer, options, and per-frame properties.
pub mod render;
/// Stroke input model.
pub mod stroke;
/// Drawing-surface contract and implementations.
pub mod surface;

pub use foundation::core::{Canvas, Point, PointSequence, Vec2, point_is_finite};
pub use foundation::error::{StrokeError, StrokeResult};
pub use geometry::filter::filter_parallel_points;
pub use geometry::path_data::{parse_outline, points_to_path_data};
pub use geometry::points::{extend_end, extend_point_along_line, extend_start, path_length};
pub use geometry::polygon::{DEFAULT_MITER_LIMIT, lines_to_polygon, lines_to_polygon_with_limit};
pub use geometry::portion::line_segments_portion;
pub use mask::{DashMask, MaskKind, MaskStrategy, PolygonMask, extended_mask_points};
pub use render::options::{DEFAULT_DASH_SEAM_FACTOR, DEFAULT_MASK_WIDTH, RenderOptions};
pub use render::props::RenderProps;
pub use render::renderer::{Renderer, StrokeRenderer};
pub use stroke::model::Stroke;
pub use surface::svg_document::SvgDocument;
pub use surface::{DrawingSurface, ElementKind, NodeId};
