use super::*;

#[test]
fn point_finiteness() {
    assert!(point_is_finite(Point::new(1.0, -2.0)));
    assert!(!point_is_finite(Point::new(f64::NAN, 0.0)));
    assert!(!point_is_finite(Point::new(0.0, f64::INFINITY)));
}

#[test]
fn points_deserialize_from_xy_objects() {
    let pts: PointSequence = serde_json::from_str(r#"[{"x":1,"y":2},{"x":3.5,"y":-4}]"#).unwrap();
    assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
}
