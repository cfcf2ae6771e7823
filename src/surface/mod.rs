//! Drawing-surface contract and the in-memory SVG implementation.

/// In-memory SVG document surface.
pub mod svg_document;

use crate::foundation::error::StrokeResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Opaque handle to an element owned by a [`DrawingSurface`].
pub struct NodeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Element kinds a renderer may create.
pub enum ElementKind {
    /// Document root.
    Svg,
    /// Definitions container (masks, clip paths).
    Defs,
    /// Grouping element.
    Group,
    /// Path element.
    Path,
    /// Luminance mask container.
    Mask,
    /// Clip-path container.
    ClipPath,
    /// Circle element.
    Circle,
}

impl ElementKind {
    /// SVG tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Defs => "defs",
            Self::Group => "g",
            Self::Path => "path",
            Self::Mask => "mask",
            Self::ClipPath => "clipPath",
            Self::Circle => "circle",
        }
    }
}

/// Element-tree primitives a renderer needs from its target.
///
/// Every call is a side effect on the surface. Handles stay valid until [`remove`] is called
/// on them or on one of their ancestors.
///
/// [`remove`]: DrawingSurface::remove
pub trait DrawingSurface {
    /// Container visible drawables are appended to.
    fn root(&self) -> NodeId;

    /// Container masks and clip paths are appended to.
    fn defs(&self) -> NodeId;

    /// Create a detached element.
    fn create_element(&mut self, kind: ElementKind) -> StrokeResult<NodeId>;

    /// Attach `child` as the last child of `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> StrokeResult<()>;

    /// Set a presentation attribute.
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> StrokeResult<()>;

    /// Set an inline style property.
    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> StrokeResult<()>;

    /// Remove an element and its subtree.
    fn remove(&mut self, node: NodeId) -> StrokeResult<()>;

    /// Set several attributes in order.
    fn set_attrs(&mut self, node: NodeId, attrs: &[(&str, &str)]) -> StrokeResult<()> {
        for (name, value) in attrs {
            self.set_attr(node, name, value)?;
        }
        Ok(())
    }
}
