use std::path::PathBuf;

use super::*;

fn slots(paths: &[Option<&str>]) -> Vec<Option<PathBuf>> {
    paths.iter().map(|p| p.map(PathBuf::from)).collect()
}

fn order(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn selection_is_deterministic() {
    let mut variant = VariantParts::new();
    variant.insert(
        "background".to_string(),
        slots(&[None, Some("bg1"), Some("bg2"), Some("bg3")]),
    );
    variant.insert("face".to_string(), slots(&[None, Some("f1"), Some("f2")]));
    let order = order(&["background", "face"]);

    let a = select_parts(&variant, &order, "alice");
    let b = select_parts(&variant, &order, "alice");
    assert_eq!(a, b);
}

#[test]
fn selection_preserves_configured_order() {
    // Length-2 lists always resolve to slot 1, so the full stack is chosen.
    let mut variant = VariantParts::new();
    variant.insert("background".to_string(), slots(&[None, Some("bg1")]));
    variant.insert("face".to_string(), slots(&[None, Some("f1")]));
    variant.insert("clothes".to_string(), slots(&[None, Some("c1")]));
    let order = order(&["background", "face", "clothes"]);

    let picked = select_parts(&variant, &order, "bob");
    assert_eq!(
        picked,
        vec![
            PathBuf::from("bg1"),
            PathBuf::from("f1"),
            PathBuf::from("c1")
        ]
    );
}

#[test]
fn slot_0_is_never_selected() {
    let mut variant = VariantParts::new();
    variant.insert(
        "background".to_string(),
        slots(&[Some("bg0"), Some("bg1")]),
    );
    let order = order(&["background"]);

    for i in 0..200 {
        let picked = select_parts(&variant, &order, &format!("id-{i}"));
        assert_eq!(picked, vec![PathBuf::from("bg1")]);
    }
}

#[test]
fn single_slot_list_is_unreachable() {
    // floor(draw * 1) = 0 clamps up to 1, which is out of range.
    let mut variant = VariantParts::new();
    variant.insert("background".to_string(), slots(&[Some("bg0")]));
    let order = order(&["background"]);

    assert!(select_parts(&variant, &order, "anyone").is_empty());
}

#[test]
fn empty_slot_contributes_nothing() {
    // Length-2 list whose only selectable slot is a gap.
    let mut variant = VariantParts::new();
    variant.insert("background".to_string(), slots(&[Some("bg0"), None]));
    let order = order(&["background"]);

    for i in 0..50 {
        assert!(select_parts(&variant, &order, &format!("id-{i}")).is_empty());
    }
}

#[test]
fn absent_part_consumes_no_draw() {
    // With "face" entirely absent, "clothes" must receive the draw "face"
    // would otherwise have taken, i.e. selection matches a catalog that never
    // listed "face" at all.
    let clothes = slots(&[
        None,
        Some("c1"),
        Some("c2"),
        Some("c3"),
        Some("c4"),
        Some("c5"),
        Some("c6"),
        Some("c7"),
    ]);

    let mut without_face = VariantParts::new();
    without_face.insert("clothes".to_string(), clothes.clone());

    let mut only_clothes = VariantParts::new();
    only_clothes.insert("clothes".to_string(), clothes);

    let two_part_order = order(&["face", "clothes"]);
    let one_part_order = order(&["clothes"]);
    for i in 0..50 {
        let id = format!("id-{i}");
        assert_eq!(
            select_parts(&without_face, &two_part_order, &id),
            select_parts(&only_clothes, &one_part_order, &id),
        );
    }
}

#[test]
fn present_part_consumes_a_draw_even_when_its_slot_is_empty() {
    // "face" exists but its only selectable slot is a gap: it still burns a
    // draw, so "clothes" picks differently than when "face" is absent for at
    // least some identifiers.
    let clothes = slots(&[
        None,
        Some("c1"),
        Some("c2"),
        Some("c3"),
        Some("c4"),
        Some("c5"),
        Some("c6"),
        Some("c7"),
    ]);

    let mut with_gap_face = VariantParts::new();
    with_gap_face.insert("face".to_string(), slots(&[Some("f0"), None]));
    with_gap_face.insert("clothes".to_string(), clothes.clone());

    let mut without_face = VariantParts::new();
    without_face.insert("clothes".to_string(), clothes);

    let two_part_order = order(&["face", "clothes"]);
    let diverged = (0..50).any(|i| {
        let id = format!("id-{i}");
        select_parts(&with_gap_face, &two_part_order, &id)
            != select_parts(&without_face, &two_part_order, &id)
    });
    assert!(diverged);
}
