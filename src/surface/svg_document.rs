use std::{collections::BTreeMap, fmt::Write as _, path::Path};

use anyhow::Context;

use super::{DrawingSurface, ElementKind, NodeId};
use crate::foundation::{
    core::Canvas,
    error::{StrokeError, StrokeResult},
};

#[derive(Clone, Debug)]
struct Node {
    kind: ElementKind,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attrs: BTreeMap::new(),
            style: BTreeMap::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// In-memory SVG element tree implementing [`DrawingSurface`].
///
/// The document is `<svg><defs/><g/></svg>`: masks go into `defs`, drawables into the group.
/// Every mutating call bumps [`SvgDocument::mutation_count`]. The tree can be serialized to
/// markup or rasterized through `usvg`/`resvg`.
#[derive(Clone, Debug)]
pub struct SvgDocument {
    canvas: Canvas,
    nodes: Vec<Option<Node>>,
    svg: NodeId,
    defs: NodeId,
    root: NodeId,
    mutations: u64,
}

impl SvgDocument {
    /// Empty document with a `viewBox` of `[min_x, min_y, width, height]`.
    pub fn new(canvas: Canvas, view_box: [f64; 4]) -> Self {
        let mut svg = Node::new(ElementKind::Svg);
        svg.attrs
            .insert("xmlns".to_string(), "http://www.w3.org/2000/svg".to_string());
        svg.attrs
            .insert("width".to_string(), canvas.width.to_string());
        svg.attrs
            .insert("height".to_string(), canvas.height.to_string());
        let [x, y, w, h] = view_box;
        svg.attrs
            .insert("viewBox".to_string(), format!("{x} {y} {w} {h}"));
        svg.children = vec![NodeId(1), NodeId(2)];

        let mut defs = Node::new(ElementKind::Defs);
        defs.parent = Some(NodeId(0));
        let mut group = Node::new(ElementKind::Group);
        group.parent = Some(NodeId(0));

        Self {
            canvas,
            nodes: vec![Some(svg), Some(defs), Some(group)],
            svg: NodeId(0),
            defs: NodeId(1),
            root: NodeId(2),
            mutations: 0,
        }
    }

    /// Apply `transform` to the drawable group (e.g. to flip a y-up glyph box).
    pub fn with_root_transform(mut self, transform: &str) -> Self {
        if let Some(group) = self.nodes[self.root.0 as usize].as_mut() {
            group
                .attrs
                .insert("transform".to_string(), transform.to_string());
        }
        self
    }

    /// Output viewport.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Number of mutating calls made through [`DrawingSurface`].
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Whether `node` is still alive.
    pub fn contains(&self, node: NodeId) -> bool {
        self.get(node).is_ok()
    }

    /// Number of live elements, including the three structural ones.
    pub fn element_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Kind of a live element.
    pub fn kind(&self, node: NodeId) -> Option<ElementKind> {
        self.get(node).ok().map(|n| n.kind)
    }

    /// Attribute value of a live element.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).ok()?.attrs.get(name).map(String::as_str)
    }

    /// Inline style value of a live element.
    pub fn style(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).ok()?.style.get(name).map(String::as_str)
    }

    /// Children of a live element, in document order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent of a live element.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).ok()?.parent
    }

    /// Serialize the document as SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(self.svg, &mut out);
        out
    }

    /// Rasterize to straight (non-premultiplied) RGBA8 at the canvas size.
    #[tracing::instrument(skip(self), fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render_rgba8(&self) -> StrokeResult<Vec<u8>> {
        let markup = self.to_svg_string();
        let tree = usvg::Tree::from_str(&markup, &usvg::Options::default())
            .map_err(|e| StrokeError::render(format!("re-parse svg document: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(self.canvas.width, self.canvas.height)
            .ok_or_else(|| StrokeError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::default(),
            &mut pixmap.as_mut(),
        );

        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(rgba)
    }

    /// Rasterize and write a PNG file.
    pub fn save_png(&self, path: &Path) -> StrokeResult<()> {
        let rgba = self.render_rgba8()?;
        image::save_buffer_with_format(
            path,
            &rgba,
            self.canvas.width,
            self.canvas.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    fn get(&self, node: NodeId) -> StrokeResult<&Node> {
        self.nodes
            .get(node.0 as usize)
            .and_then(Option::as_ref)
            .ok_or_else(|| StrokeError::surface(format!("unknown node {}", node.0)))
    }

    fn get_mut(&mut self, node: NodeId) -> StrokeResult<&mut Node> {
        self.nodes
            .get_mut(node.0 as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| StrokeError::surface(format!("unknown node {}", node.0)))
    }

    fn detach(&mut self, node: NodeId) -> StrokeResult<()> {
        if let Some(parent) = self.get_mut(node)?.parent.take() {
            self.get_mut(parent)?.children.retain(|&c| c != node);
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == candidate {
                return true;
            }
            cur = self.get(n).ok().and_then(|n| n.parent);
        }
        false
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Ok(n) = self.get(node) else {
            return;
        };
        let tag = n.kind.tag();
        let _ = write!(out, "<{tag}");
        for (name, value) in &n.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
        }
        if !n.style.is_empty() {
            let css: Vec<String> = n.style.iter().map(|(k, v)| format!("{k}:{v}")).collect();
            let _ = write!(out, " style=\"{}\"", escape_attr(&css.join(";")));
        }
        if n.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for &child in &n.children {
            self.write_node(child, out);
        }
        let _ = write!(out, "</{tag}>");
    }
}

impl DrawingSurface for SvgDocument {
    fn root(&self) -> NodeId {
        self.root
    }

    fn defs(&self) -> NodeId {
        self.defs
    }

    fn create_element(&mut self, kind: ElementKind) -> StrokeResult<NodeId> {
        let id = NodeId(
            self.nodes
                .len()
                .try_into()
                .map_err(|_| StrokeError::surface("node id overflow"))?,
        );
        self.nodes.push(Some(Node::new(kind)));
        self.mutations += 1;
        Ok(id)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> StrokeResult<()> {
        self.get(parent)?;
        self.get(child)?;
        if self.is_ancestor_or_self(child, parent) {
            return Err(StrokeError::surface(format!(
                "cannot append node {} under its own descendant {}",
                child.0, parent.0
            )));
        }
        self.detach(child)?;
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        self.mutations += 1;
        Ok(())
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> StrokeResult<()> {
        self.get_mut(node)?
            .attrs
            .insert(name.to_string(), value.to_string());
        self.mutations += 1;
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> StrokeResult<()> {
        self.get_mut(node)?
            .style
            .insert(name.to_string(), value.to_string());
        self.mutations += 1;
        Ok(())
    }

    fn remove(&mut self, node: NodeId) -> StrokeResult<()> {
        if node == self.svg || node == self.defs || node == self.root {
            return Err(StrokeError::surface("structural nodes cannot be removed"));
        }
        self.detach(node)?;

        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            if let Some(removed) = self.nodes.get_mut(n.0 as usize).and_then(Option::take) {
                stack.extend(removed.children);
            }
        }
        self.mutations += 1;
        Ok(())
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/svg_document.rs"]
mod tests;
