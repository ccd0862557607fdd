use crate::resolve::{map_display_name, MatchKind, MaterialResolver};
use crate::ViewId;

#[test]
fn mapped_names_resolve_exactly() {
    let r = MaterialResolver::default();
    let hit = r.resolve(ViewId::Fridge, "NbTi").unwrap();
    assert_eq!(hit.material.name, "Niobium Titanium (NbTi)");
    assert_eq!(hit.kind, MatchKind::Exact);

    let hit = r.resolve(ViewId::Chip, "Sapphire").unwrap();
    assert_eq!(hit.material.name, "Sapphire (Al₂O₃)");
    assert_eq!(r.resolve(ViewId::Chip, "High-R Silicon").unwrap().material.name, "Silicon");
}

#[test]
fn mappings_are_per_view() {
    assert_eq!(map_display_name(ViewId::Fridge, "Kapton"), "Kapton (Polyimide)");
    assert_eq!(map_display_name(ViewId::Chip, "Kapton"), "Kapton");
    // Still found on the chip view through the substring pass.
    let hit = MaterialResolver::default()
        .resolve(ViewId::Chip, "Kapton")
        .unwrap();
    assert_eq!(hit.material.name, "Kapton (Polyimide)");
    assert_eq!(hit.kind, MatchKind::Substring);
}

#[test]
fn exact_match_beats_earlier_substring_hits() {
    // "Copper" is also a substring of "Yttrium Barium Copper Oxide" and "Beryllium Copper".
    let hit = MaterialResolver::default()
        .resolve(ViewId::Chip, "Copper")
        .unwrap();
    assert_eq!(hit.material.name, "Copper");
    assert_eq!(hit.kind, MatchKind::Exact);
}

#[test]
fn substring_pass_uses_catalog_order() {
    let hit = MaterialResolver::default()
        .resolve(ViewId::Fridge, "niobium")
        .unwrap();
    assert_eq!(hit.material.name, "Niobium");
    assert_eq!(hit.kind, MatchKind::Substring);

    let hit = MaterialResolver::default()
        .resolve(ViewId::Fridge, "helium")
        .unwrap();
    assert_eq!(hit.material.name, "Helium-3");
}

#[test]
fn unresolvable_and_blank_names_are_none() {
    let r = MaterialResolver::default();
    assert!(r.resolve(ViewId::Fridge, "Unobtainium").is_none());
    assert!(r.resolve(ViewId::Fridge, "").is_none());
    assert!(r.resolve(ViewId::Fridge, "   ").is_none());
}

#[test]
fn exact_resolution_skips_mapping() {
    let r = MaterialResolver::default();
    assert!(r.resolve_exact("NbTi").is_none());
    assert_eq!(r.resolve_exact("Gold").unwrap().name, "Gold");
}
