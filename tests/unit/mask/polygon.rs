use super::*;
use crate::{foundation::core::Canvas, surface::svg_document::SvgDocument};

fn doc() -> SvgDocument {
    SvgDocument::new(Canvas::default(), [0.0, 0.0, 1024.0, 1024.0])
}

fn points() -> Vec<Point> {
    vec![Point::new(-100.0, 0.0), Point::new(1100.0, 0.0)]
}

#[test]
fn mount_reveals_everything_with_tip_first() {
    let mut d = doc();
    let m = PolygonMask::mount(&mut d, points(), 1000.0, &RenderOptions::default()).unwrap();

    assert_eq!(d.children(m.container()), &[m.tip(), m.mask_path()]);
    assert_eq!(d.attr(m.tip(), "r"), Some("100"));
    assert_eq!(m.tip_center(), Some(Point::new(1100.0, 0.0)));
    assert_eq!(d.attr(m.tip(), "cx"), Some("1100"));
    assert_eq!(d.attr(m.tip(), "cy"), Some("0"));
    assert_eq!(
        d.attr(m.mask_path(), "d"),
        Some("M -100 100 L 1100 100 L 1100 -100 L -100 -100 Z")
    );
    assert_eq!(m.outline().len(), 4);
}

#[test]
fn update_moves_tip_to_portion_head() {
    let mut d = doc();
    let mut m = PolygonMask::mount(&mut d, points(), 1000.0, &RenderOptions::default()).unwrap();

    m.update_portion(&mut d, 0.5).unwrap();
    assert_eq!(m.tip_center(), Some(Point::new(500.0, 0.0)));
    assert_eq!(d.attr(m.tip(), "cx"), Some("500"));
    assert_eq!(
        d.attr(m.mask_path(), "d"),
        Some("M -100 100 L 500 100 L 500 -100 L -100 -100 Z")
    );

    m.update_portion(&mut d, 0.0).unwrap();
    assert_eq!(m.tip_center(), Some(Point::new(-100.0, 0.0)));
    assert_eq!(d.attr(m.mask_path(), "d"), Some("M -100 0 Z"));
}

#[test]
fn zero_length_stroke_is_always_open() {
    let mut d = doc();
    let mut m = PolygonMask::mount(&mut d, points(), 0.0, &RenderOptions::default()).unwrap();
    m.update_portion(&mut d, 0.0).unwrap();
    assert_eq!(m.tip_center(), Some(Point::new(1100.0, 0.0)));
}

#[test]
fn empty_centerline_leaves_tip_unplaced() {
    let mut d = doc();
    let m = PolygonMask::mount(&mut d, Vec::new(), 0.0, &RenderOptions::default()).unwrap();
    assert_eq!(m.tip_center(), None);
    assert_eq!(d.attr(m.tip(), "cx"), None);
    assert_eq!(d.attr(m.mask_path(), "d"), Some(""));
}
