use crate::{
    foundation::{
        core::Point,
        error::StrokeResult,
        math::{LENGTH_EPSILON, fmt_num},
    },
    geometry::{
        path_data::points_to_path_data, polygon::lines_to_polygon_with_limit,
        portion::line_segments_portion,
    },
    render::options::RenderOptions,
    surface::{DrawingSurface, ElementKind, NodeId},
};

#[derive(Clone, Debug)]
/// Reveal mask that clips the stroke to the thickened outline of its revealed prefix.
///
/// A circle of radius `width / 2` rides on the head of the prefix so the reveal front is
/// rounded, matching the round cap a dashed mask would have.
pub struct PolygonMask {
    container: NodeId,
    mask_path: NodeId,
    tip: NodeId,
    extended_points: Vec<Point>,
    width: f64,
    miter_limit: f64,
    fully_open: bool,
    outline: Vec<Point>,
    tip_center: Option<Point>,
}

impl PolygonMask {
    /// Create the `<clipPath>` container with its tip circle and outline path, fully revealed.
    ///
    /// `extended_points` must already be pushed outward at both ends.
    pub fn mount<S: DrawingSurface + ?Sized>(
        surface: &mut S,
        extended_points: Vec<Point>,
        stroke_length: f64,
        options: &RenderOptions,
    ) -> StrokeResult<Self> {
        let container = surface.create_element(ElementKind::ClipPath)?;
        let mask_path = surface.create_element(ElementKind::Path)?;
        let tip = surface.create_element(ElementKind::Circle)?;

        // The tip goes in ahead of the outline path.
        surface.append_child(container, tip)?;
        surface.set_attr(tip, "r", &fmt_num(options.half_width()))?;

        let mut mask = Self {
            container,
            mask_path,
            tip,
            extended_points,
            width: options.mask_width,
            miter_limit: options.miter_limit,
            fully_open: stroke_length <= LENGTH_EPSILON,
            outline: Vec::new(),
            tip_center: None,
        };
        mask.update_portion(surface, 1.0)?;
        surface.append_child(container, mask_path)?;
        Ok(mask)
    }

    /// `<clipPath>` container element.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The polygon outline path.
    pub fn mask_path(&self) -> NodeId {
        self.mask_path
    }

    /// The round tip circle.
    pub fn tip(&self) -> NodeId {
        self.tip
    }

    /// Centerline the outline is cut from.
    pub fn extended_points(&self) -> &[Point] {
        &self.extended_points
    }

    /// Polygon applied by the last update.
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Center of the tip circle, if the centerline has any points.
    pub fn tip_center(&self) -> Option<Point> {
        self.tip_center
    }

    /// Re-cut the outline so `portion` of the centerline is covered and move the tip onto its head.
    pub fn update_portion<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        portion: f64,
    ) -> StrokeResult<()> {
        let portion = if self.fully_open { 1.0 } else { portion };
        let prefix = line_segments_portion(&self.extended_points, portion);
        let outline = lines_to_polygon_with_limit(&prefix, self.width, self.miter_limit);

        surface.set_attr(self.mask_path, "d", &points_to_path_data(&outline, true))?;
        if let Some(&head) = prefix.last() {
            surface.set_attr(self.tip, "cx", &fmt_num(head.x))?;
            surface.set_attr(self.tip, "cy", &fmt_num(head.y))?;
            self.tip_center = Some(head);
        }
        self.outline = outline;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/polygon.rs"]
mod tests;
