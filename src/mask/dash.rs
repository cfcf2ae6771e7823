use crate::{
    foundation::{
        core::Point,
        error::StrokeResult,
        math::{LENGTH_EPSILON, fmt_num},
    },
    geometry::path_data::points_to_path_data,
    render::options::RenderOptions,
    surface::{DrawingSurface, ElementKind, NodeId},
};

#[derive(Clone, Debug)]
/// Reveal mask built from one thick white path with a single dash as long as the path.
///
/// Sliding the dash offset from `mask_length` down to zero uncovers the stroke from its
/// start. The offset is scaled by `seam_factor` so a fully revealed stroke never shows the
/// one-unit seam that path-length rounding leaves at the far end.
pub struct DashMask {
    container: NodeId,
    mask_path: NodeId,
    mask_length: f64,
    seam_factor: f64,
    fully_open: bool,
    dash_offset: f64,
}

impl DashMask {
    /// Create the `<mask>` container and its path following `extended_points`.
    ///
    /// `stroke_length` is the stroke's own arc length; the dash covers it plus the half width
    /// the start was pushed back by. A zero-length stroke yields a mask that is always open.
    pub fn mount<S: DrawingSurface + ?Sized>(
        surface: &mut S,
        extended_points: &[Point],
        stroke_length: f64,
        options: &RenderOptions,
    ) -> StrokeResult<Self> {
        let container = surface.create_element(ElementKind::Mask)?;
        let mask_path = surface.create_element(ElementKind::Path)?;

        let mask_length = stroke_length + options.half_width();
        let stroke_width = fmt_num(options.mask_width);
        let dash = fmt_num(mask_length);
        let dash_array = format!("{dash},{dash}");
        surface.set_attr(
            mask_path,
            "d",
            &points_to_path_data(extended_points, false),
        )?;
        surface.set_attrs(
            mask_path,
            &[
                ("stroke", "#FFFFFF"),
                ("stroke-width", stroke_width.as_str()),
                ("fill", "none"),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "miter"),
                ("stroke-dasharray", dash_array.as_str()),
            ],
        )?;
        surface.append_child(container, mask_path)?;

        Ok(Self {
            container,
            mask_path,
            mask_length,
            seam_factor: options.dash_seam_factor,
            fully_open: stroke_length <= LENGTH_EPSILON,
            dash_offset: 0.0,
        })
    }

    /// `<mask>` container element.
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// The dashed mask path.
    pub fn mask_path(&self) -> NodeId {
        self.mask_path
    }

    /// Length of the dash and of the gap.
    pub fn mask_length(&self) -> f64 {
        self.mask_length
    }

    /// Dash pattern `[dash, gap]`.
    pub fn dash_array(&self) -> [f64; 2] {
        [self.mask_length, self.mask_length]
    }

    /// Dash offset applied by the last update (`0` before any update).
    pub fn dash_offset(&self) -> f64 {
        self.dash_offset
    }

    /// Dash offset that reveals `portion` of the stroke.
    pub fn offset_for(&self, portion: f64) -> f64 {
        if self.fully_open {
            return 0.0;
        }
        self.mask_length * self.seam_factor * (1.0 - portion)
    }

    /// Slide the dash so `portion` of the stroke shows.
    pub fn update_portion<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        portion: f64,
    ) -> StrokeResult<()> {
        let offset = self.offset_for(portion);
        surface.set_style(self.mask_path, "stroke-dashoffset", &fmt_num(offset))?;
        self.dash_offset = offset;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/dash.rs"]
mod tests;
