use super::*;

#[test]
fn defaults_match_reference_constants() {
    let o = RenderOptions::default();
    assert!(!o.use_polygon_masks);
    assert_eq!(o.mask_width, 200.0);
    assert_eq!(o.half_width(), 100.0);
    assert_eq!(o.dash_seam_factor, 0.999);
    o.validate().unwrap();
}

#[test]
fn json_fills_missing_fields() {
    let o = RenderOptions::from_json_str(r#"{"usePolygonMasks": true}"#).unwrap();
    assert!(o.use_polygon_masks);
    assert_eq!(o.mask_width, DEFAULT_MASK_WIDTH);

    let o = RenderOptions::from_json_str(r#"{"mask_width": 120, "dash_seam_factor": 1}"#).unwrap();
    assert_eq!(o.half_width(), 60.0);
    assert_eq!(o.dash_seam_factor, 1.0);
}

#[test]
fn invalid_values_are_rejected() {
    assert!(RenderOptions::from_json_str(r#"{"mask_width": 0}"#).is_err());
    assert!(RenderOptions::from_json_str(r#"{"dash_seam_factor": 1.5}"#).is_err());
    assert!(RenderOptions::from_json_str(r#"{"dash_seam_factor": 0}"#).is_err());
    assert!(RenderOptions::from_json_str(r#"{"miter_limit": 0.5}"#).is_err());
    assert!(matches!(
        RenderOptions::from_json_str(r#"{"bogus": 1}"#),
        Err(StrokeError::Serde(_))
    ));
}
