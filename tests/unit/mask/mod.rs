use super::*;
use crate::{
    render::options::RenderOptions,
    surface::{DrawingSurface, ElementKind, svg_document::SvgDocument},
};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn doc() -> SvgDocument {
    SvgDocument::new(crate::foundation::core::Canvas::default(), [0.0, 0.0, 1024.0, 1024.0])
}

#[test]
fn extension_filters_then_pushes_ends() {
    let pts = [p(0.0, 0.0), p(500.0, 0.0), p(1000.0, 0.0)];
    assert_eq!(
        extended_mask_points(&pts, 100.0, false),
        vec![p(-100.0, 0.0), p(1000.0, 0.0)]
    );
    assert_eq!(
        extended_mask_points(&pts, 100.0, true),
        vec![p(-100.0, 0.0), p(1100.0, 0.0)]
    );
}

#[test]
fn extension_of_degenerate_input_is_identity() {
    assert!(extended_mask_points(&[], 100.0, true).is_empty());
    assert_eq!(extended_mask_points(&[p(4.0, 4.0)], 100.0, true), vec![p(4.0, 4.0)]);
}

#[test]
fn strategy_dispatch_and_teardown() {
    let opts = RenderOptions::default();
    let pts = extended_mask_points(&[p(0.0, 0.0), p(100.0, 0.0)], opts.half_width(), true);

    let mut d = doc();
    let mut dash =
        MaskStrategy::DashOffset(DashMask::mount(&mut d, &pts, 100.0, &opts).unwrap());
    assert_eq!(dash.kind(), MaskKind::DashOffset);
    assert_eq!(dash.reference_attr(), "mask");
    assert_eq!(d.kind(dash.container()), Some(ElementKind::Mask));
    dash.update_portion(&mut d, 0.0).unwrap();
    dash.teardown(&mut d).unwrap();
    assert_eq!(d.element_count(), 3);

    let mut poly =
        MaskStrategy::PolygonClip(PolygonMask::mount(&mut d, pts, 100.0, &opts).unwrap());
    assert_eq!(poly.kind(), MaskKind::PolygonClip);
    assert_eq!(poly.reference_attr(), "clip-path");
    assert_eq!(d.kind(poly.container()), Some(ElementKind::ClipPath));
    poly.update_portion(&mut d, 0.5).unwrap();
    let defs = d.defs();
    d.append_child(defs, poly.container()).unwrap();
    poly.teardown(&mut d).unwrap();
    assert_eq!(d.element_count(), 3);
    assert!(d.children(defs).is_empty());
}
