use super::*;
use crate::foundation::core::Point;

fn stroke(is_in_radical: bool) -> Stroke {
    Stroke::new(
        "M 0 0",
        vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
        is_in_radical,
    )
}

fn props(radical: Option<&str>) -> RenderProps {
    RenderProps {
        stroke_color: "#000".to_string(),
        radical_color: radical.map(str::to_string),
        ..RenderProps::default()
    }
}

#[test]
fn radical_color_applies_only_to_radical_strokes() {
    let p = props(Some("#F00"));
    assert_eq!(p.effective_color(&stroke(true)), "#F00");
    assert_eq!(p.effective_color(&stroke(false)), "#000");
}

#[test]
fn missing_or_empty_radical_color_falls_back() {
    assert_eq!(props(None).effective_color(&stroke(true)), "#000");
    assert_eq!(props(Some("")).effective_color(&stroke(true)), "#000");
}

#[test]
fn camel_case_json() {
    let p: RenderProps = serde_json::from_str(
        r##"{"displayPortion":0.5,"strokeColor":"#111","radicalColor":null,"strokeWidth":3,"opacity":1}"##,
    )
    .unwrap();
    assert_eq!(p.display_portion, 0.5);
    assert_eq!(p.radical_color, None);
    p.validate().unwrap();
}

#[test]
fn validation() {
    let bad = RenderProps {
        stroke_width: f64::NAN,
        ..RenderProps::default()
    };
    assert!(bad.validate().is_err());
    let bad = RenderProps {
        opacity: f64::INFINITY,
        ..RenderProps::default()
    };
    assert!(bad.validate().is_err());
}
