use super::*;

#[test]
fn open_and_closed_paths() {
    let pts = [Point::new(-100.0, 0.0), Point::new(1000.0, 0.5)];
    assert_eq!(points_to_path_data(&pts, false), "M -100 0 L 1000 0.5");
    assert_eq!(points_to_path_data(&pts, true), "M -100 0 L 1000 0.5 Z");
}

#[test]
fn empty_and_single_point() {
    assert_eq!(points_to_path_data(&[], true), "");
    assert_eq!(points_to_path_data(&[Point::new(1.0, 2.0)], false), "M 1 2");
}

#[test]
fn outline_parsing() {
    assert!(parse_outline("M 0 0 L 10 0 Q 20 5 10 10 Z").is_some());
    assert!(parse_outline("M 0 0 L nope").is_none());
}
