use cryoviz_core::{ComponentCatalog, ThemePalette, ViewId};
use cryoviz_render::scene::{LabelKind, Light, SELECTION_EMISSIVE, build_scene};
use cryoviz_render::{FridgeGeometry, SceneOptions};

#[test]
fn unselected_scene() {
    let geometry = FridgeGeometry::new();
    let scene = build_scene(
        &geometry,
        None,
        &ThemePalette::dark(),
        &SceneOptions::default(),
    )
    .expect("scene");

    assert_eq!(scene.selected_component, None);
    assert_eq!(scene.lights.len(), 4);
    assert!(matches!(scene.lights[0], Light::Ambient { intensity } if intensity == 0.4));

    // shell, 5 plates + 60 bolts, 3 shields, 16 rods, box + panel + 3 leds, 6 wires,
    // vessel, chip, glow ring
    assert_eq!(scene.meshes.len(), 99);
    assert_eq!(scene.labels.len(), 11);
    assert!(scene.labels.iter().all(|l| !l.active));
    assert!(
        scene
            .meshes
            .iter()
            .filter(|m| m.component_key.is_some() && m.name != "qpuChip")
            .all(|m| m.material.emissive_intensity == 0.0 || m.name.starts_with("wire"))
    );
}

#[test]
fn pickable_keys_come_from_the_fridge_catalog() {
    let scene = build_scene(
        &FridgeGeometry::new(),
        None,
        &ThemePalette::light(),
        &SceneOptions::default(),
    )
    .expect("scene");
    let catalog = ComponentCatalog::for_view(ViewId::Fridge);
    let keys = scene.pickable_component_keys();
    assert_eq!(keys.len(), 6);
    for key in keys {
        assert!(catalog.contains(key));
    }
    // Glass shells must not steal clicks from the plates inside them.
    assert!(
        scene
            .meshes
            .iter()
            .filter(|m| m.name == "outerShell" || m.name.starts_with("shield"))
            .all(|m| !m.pickable)
    );
}

#[test]
fn selection_lights_up_the_component() {
    let scene = build_scene(
        &FridgeGeometry::new(),
        Some("upperCoolingStage"),
        &ThemePalette::dark(),
        &SceneOptions::default(),
    )
    .expect("scene");
    assert_eq!(scene.selected_component, Some("upperCoolingStage"));

    let plate = scene
        .meshes_for("upperCoolingStage")
        .find(|m| m.name == "plate.fortyK")
        .expect("40 K plate");
    assert_eq!(plate.material.emissive, SELECTION_EMISSIVE);
    assert_eq!(plate.material.emissive_intensity, 0.15);

    let shield = scene
        .meshes_for("upperCoolingStage")
        .find(|m| m.name.starts_with("shield"))
        .expect("40 K shield");
    assert_eq!(shield.material.opacity, 0.18);

    let active: Vec<_> = scene
        .labels
        .iter()
        .filter(|l| l.active)
        .map(|l| (l.kind, l.text.as_str()))
        .collect();
    assert_eq!(active, vec![(LabelKind::Number, "3")]);
}

#[test]
fn unknown_selection_is_an_error() {
    let err = build_scene(
        &FridgeGeometry::new(),
        Some("warpCore"),
        &ThemePalette::dark(),
        &SceneOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("warpCore"));
}

#[test]
fn options_drop_decoration_and_json_is_tagged() {
    let options = SceneOptions {
        bolts: false,
        rods: false,
        shell_segments: 16,
    };
    let scene = build_scene(&FridgeGeometry::new(), None, &ThemePalette::dark(), &options)
        .expect("scene");
    assert_eq!(scene.meshes.len(), 99 - 60 - 16);

    let json = scene.to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["meshes"][0]["geometry"]["type"], "lathe");
    assert_eq!(value["meshes"][0]["geometry"]["segments"], 16);
    assert_eq!(value["lights"][1]["type"], "directional");
    assert_eq!(value["camera"]["fovDeg"], 45.0);
}
