use super::*;

fn doc() -> SvgDocument {
    SvgDocument::new(
        Canvas {
            width: 32,
            height: 32,
        },
        [0.0, 0.0, 32.0, 32.0],
    )
}

#[test]
fn new_document_has_structure_and_no_mutations() {
    let d = doc();
    assert_eq!(d.mutation_count(), 0);
    assert_eq!(d.element_count(), 3);
    assert_eq!(d.kind(d.defs()), Some(ElementKind::Defs));
    assert_eq!(d.kind(d.root()), Some(ElementKind::Group));
    assert_eq!(
        d.to_svg_string(),
        "<svg height=\"32\" viewBox=\"0 0 32 32\" width=\"32\" \
         xmlns=\"http://www.w3.org/2000/svg\"><defs/><g/></svg>"
    );
}

#[test]
fn create_append_and_serialize() {
    let mut d = doc();
    let path = d.create_element(ElementKind::Path).unwrap();
    d.set_attrs(path, &[("d", "M 0 0 L 4 4"), ("fill", "a&b")])
        .unwrap();
    d.set_style(path, "opacity", "0").unwrap();
    let root = d.root();
    d.append_child(root, path).unwrap();

    assert_eq!(d.mutation_count(), 5);
    assert_eq!(d.children(root), &[path]);
    assert_eq!(d.parent(path), Some(root));
    assert_eq!(d.attr(path, "d"), Some("M 0 0 L 4 4"));
    assert_eq!(d.style(path, "opacity"), Some("0"));
    assert!(
        d.to_svg_string()
            .contains("<g><path d=\"M 0 0 L 4 4\" fill=\"a&amp;b\" style=\"opacity:0\"/></g>")
    );
}

#[test]
fn reappending_moves_the_node() {
    let mut d = doc();
    let c = d.create_element(ElementKind::Circle).unwrap();
    let (root, defs) = (d.root(), d.defs());
    d.append_child(root, c).unwrap();
    d.append_child(defs, c).unwrap();
    assert!(d.children(root).is_empty());
    assert_eq!(d.children(defs), &[c]);
}

#[test]
fn cycles_are_rejected() {
    let mut d = doc();
    let outer = d.create_element(ElementKind::Mask).unwrap();
    let inner = d.create_element(ElementKind::Path).unwrap();
    d.append_child(outer, inner).unwrap();
    assert!(d.append_child(inner, outer).is_err());
    assert!(d.append_child(outer, outer).is_err());
}

#[test]
fn remove_drops_subtree() {
    let mut d = doc();
    let mask = d.create_element(ElementKind::Mask).unwrap();
    let path = d.create_element(ElementKind::Path).unwrap();
    d.append_child(mask, path).unwrap();
    let defs = d.defs();
    d.append_child(defs, mask).unwrap();

    d.remove(mask).unwrap();
    assert!(!d.contains(mask));
    assert!(!d.contains(path));
    assert!(d.children(defs).is_empty());
    assert_eq!(d.element_count(), 3);

    assert!(matches!(d.remove(mask), Err(StrokeError::Surface(_))));
    assert!(d.set_attr(path, "d", "").is_err());
}

#[test]
fn structural_nodes_are_permanent() {
    let mut d = doc();
    let root = d.root();
    assert!(d.remove(root).is_err());
    assert!(d.contains(root));
}

#[test]
fn root_transform_is_serialized() {
    let d = doc().with_root_transform("translate(0, 900) scale(1, -1)");
    assert!(
        d.to_svg_string()
            .contains("<g transform=\"translate(0, 900) scale(1, -1)\"/>")
    );
}

#[test]
fn rasterizes_a_filled_path() {
    let mut d = doc();
    let path = d.create_element(ElementKind::Path).unwrap();
    d.set_attrs(path, &[("d", "M 0 0 L 32 0 L 32 32 L 0 32 Z"), ("fill", "#FF0000")])
        .unwrap();
    let root = d.root();
    d.append_child(root, path).unwrap();

    let rgba = d.render_rgba8().unwrap();
    assert_eq!(rgba.len(), 32 * 32 * 4);
    let center = (16 * 32 + 16) * 4;
    assert_eq!(&rgba[center..center + 4], &[255, 0, 0, 255]);
}
