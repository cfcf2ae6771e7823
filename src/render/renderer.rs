use crate::{
    foundation::{
        core::Point,
        error::{StrokeError, StrokeResult},
        math::{LENGTH_EPSILON, clamp_portion, fmt_num},
    },
    mask::{DashMask, MaskKind, MaskStrategy, PolygonMask, extended_mask_points},
    render::{options::RenderOptions, props::RenderProps},
    stroke::model::Stroke,
    surface::{DrawingSurface, ElementKind, NodeId},
};

/// Lifecycle of a renderer: mount, per-frame updates, then a single teardown.
///
/// The handle returned by [`Renderer::mount`] owns every element it created on the surface.
pub trait Renderer {
    /// What the renderer draws.
    type Source;

    /// Create the renderer's elements on `surface` and return the handle that owns them.
    fn mount(
        source: &Self::Source,
        surface: &mut dyn DrawingSurface,
        options: &RenderOptions,
    ) -> StrokeResult<Self>
    where
        Self: Sized;

    /// Apply one frame's properties, touching only what changed since the previous frame.
    fn update(&mut self, surface: &mut dyn DrawingSurface, props: &RenderProps)
    -> StrokeResult<()>;

    /// Release every element created at mount. Calling it again does nothing; after a
    /// failed call, calling it again retries whatever was not yet removed.
    fn teardown(&mut self, surface: &mut dyn DrawingSurface) -> StrokeResult<()>;
}

#[derive(Clone, Debug)]
struct Mounted {
    path: NodeId,
    path_removed: bool,
    mask: MaskStrategy,
}

#[derive(Clone, Debug)]
/// Draws one stroke's outline behind a reveal mask.
///
/// The visible path starts transparent; the first [`StrokeRenderer::update`] applies every
/// property, later ones apply only the properties that differ from the previous frame.
pub struct StrokeRenderer {
    stroke_num: usize,
    is_in_radical: bool,
    extended_mask_points: Vec<Point>,
    mounted: Option<Mounted>,
    prev: Option<RenderProps>,
}

impl StrokeRenderer {
    /// Create the visible path and its mask on `surface`.
    #[tracing::instrument(
        skip_all,
        fields(stroke = stroke.stroke_num, polygon = options.use_polygon_masks)
    )]
    pub fn mount<S: DrawingSurface + ?Sized>(
        stroke: &Stroke,
        surface: &mut S,
        options: &RenderOptions,
    ) -> StrokeResult<Self> {
        stroke.validate()?;
        options.validate()?;

        if stroke.length <= LENGTH_EPSILON {
            tracing::debug!("zero-length stroke; mask stays fully open");
        }

        let path = surface.create_element(ElementKind::Path)?;
        let extended = extended_mask_points(
            &stroke.points,
            options.half_width(),
            options.use_polygon_masks,
        );
        let mask = if options.use_polygon_masks {
            MaskStrategy::PolygonClip(PolygonMask::mount(
                surface,
                extended.clone(),
                stroke.length,
                options,
            )?)
        } else {
            MaskStrategy::DashOffset(DashMask::mount(
                surface,
                &extended,
                stroke.length,
                options,
            )?)
        };

        let container = mask.container();
        let mask_id = format!("mask-{}", container.0);
        surface.set_attr(container, "id", &mask_id)?;
        surface.set_attr(path, "d", &stroke.path)?;
        surface.set_style(path, "opacity", "0")?;
        surface.set_attr(path, mask.reference_attr(), &format!("url(#{mask_id})"))?;

        let defs = surface.defs();
        surface.append_child(defs, container)?;
        let root = surface.root();
        surface.append_child(root, path)?;

        Ok(Self {
            stroke_num: stroke.stroke_num,
            is_in_radical: stroke.is_in_radical,
            extended_mask_points: extended,
            mounted: Some(Mounted {
                path,
                path_removed: false,
                mask,
            }),
            prev: None,
        })
    }

    /// Mask centerline, filtered and pushed outward at its ends.
    pub fn extended_mask_points(&self) -> &[Point] {
        &self.extended_mask_points
    }

    /// Active mask, or `None` after teardown.
    pub fn mask(&self) -> Option<&MaskStrategy> {
        self.mounted.as_ref().map(|m| &m.mask)
    }

    /// Technique in use, or `None` after teardown.
    pub fn mask_kind(&self) -> Option<MaskKind> {
        self.mask().map(MaskStrategy::kind)
    }

    /// The visible stroke path, or `None` once teardown has removed it.
    pub fn path_node(&self) -> Option<NodeId> {
        self.mounted
            .as_ref()
            .filter(|m| !m.path_removed)
            .map(|m| m.path)
    }

    /// Whether the renderer still owns surface elements.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Properties applied by the last update.
    pub fn previous_props(&self) -> Option<&RenderProps> {
        self.prev.as_ref()
    }

    /// Apply `props`, writing only the deltas against the previous frame.
    pub fn update<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        props: &RenderProps,
    ) -> StrokeResult<()> {
        props.validate()?;
        let Some(mounted) = self.mounted.as_mut().filter(|m| !m.path_removed) else {
            return Err(StrokeError::surface(format!(
                "stroke {} renderer is not mounted",
                self.stroke_num
            )));
        };
        let prev = self.prev.as_ref();

        let portion = clamp_portion(props.display_portion);
        if portion != props.display_portion {
            tracing::debug!(
                requested = props.display_portion,
                applied = portion,
                "display portion clamped"
            );
        }
        if prev.map(|p| clamp_portion(p.display_portion)) != Some(portion) {
            tracing::trace!(portion, "mask portion");
            mounted.mask.update_portion(surface, portion)?;
        }

        let color = props.effective_color_for(self.is_in_radical);
        if prev.map(|p| p.effective_color_for(self.is_in_radical)) != Some(color) {
            tracing::trace!(color, "stroke color");
            surface.set_attrs(mounted.path, &[("fill", color), ("stroke", color)])?;
        }

        if prev.map(|p| p.stroke_width) != Some(props.stroke_width) {
            tracing::trace!(width = props.stroke_width, "stroke width");
            surface.set_attr(mounted.path, "stroke-width", &fmt_num(props.stroke_width))?;
        }

        if prev.map(|p| p.opacity) != Some(props.opacity) {
            let opacity = props.opacity.clamp(0.0, 1.0);
            tracing::trace!(opacity, "stroke opacity");
            surface.set_style(mounted.path, "opacity", &fmt_num(opacity))?;
        }

        self.prev = Some(props.clone());
        Ok(())
    }

    /// Remove the visible path and then the mask. A second call is a no-op.
    ///
    /// The renderer stays mounted until both removals succeed, so a failed teardown can be
    /// retried without leaking either element.
    #[tracing::instrument(skip_all, fields(stroke = self.stroke_num))]
    pub fn teardown<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> StrokeResult<()> {
        let Some(mounted) = self.mounted.as_mut() else {
            tracing::debug!("already torn down");
            return Ok(());
        };
        if !mounted.path_removed {
            surface.remove(mounted.path)?;
            mounted.path_removed = true;
            self.prev = None;
        }
        if let Err(err) = mounted.mask.teardown(surface) {
            tracing::debug!(error = %err, "mask removal failed; teardown can be retried");
            return Err(err);
        }
        self.mounted = None;
        Ok(())
    }
}

impl Renderer for StrokeRenderer {
    type Source = Stroke;

    fn mount(
        source: &Stroke,
        surface: &mut dyn DrawingSurface,
        options: &RenderOptions,
    ) -> StrokeResult<Self> {
        StrokeRenderer::mount(source, surface, options)
    }

    fn update(
        &mut self,
        surface: &mut dyn DrawingSurface,
        props: &RenderProps,
    ) -> StrokeResult<()> {
        StrokeRenderer::update(self, surface, props)
    }

    fn teardown(&mut self, surface: &mut dyn DrawingSurface) -> StrokeResult<()> {
        StrokeRenderer::teardown(self, surface)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
