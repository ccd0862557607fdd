use cryoviz_core::{ComponentCatalog, ViewId};
use cryoviz_render::fridge::{
    BOLT_COUNT, FridgeGeometry, RODS_PER_SET, SHELL_BELLY, SHELL_PROFILE_STEPS, svg_r, svg_y,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn reference_coordinates_map_to_world_units() {
    assert_eq!(svg_y(60.0), 3.0);
    assert_eq!(svg_y(660.0), -3.0);
    assert!(approx(svg_y(360.0), 0.0));
    assert_eq!(svg_r(202.0), 1.6);
    assert_eq!(svg_r(0.0), 0.0);
}

#[test]
fn every_component_key_is_in_the_fridge_catalog() {
    let geometry = FridgeGeometry::new();
    assert!(geometry.unknown_component_keys().is_empty());

    let catalog = ComponentCatalog::for_view(ViewId::Fridge);
    for component in catalog.iter() {
        assert!(
            geometry.component_keys().contains(&component.id),
            "{} has no geometry",
            component.id
        );
    }
}

#[test]
fn shell_profile_is_a_bell() {
    let geometry = FridgeGeometry::new();
    let shell = &geometry.outer_shell;
    let profile = shell.profile();
    assert_eq!(profile.len(), SHELL_PROFILE_STEPS + 1);

    let first = profile[0];
    let last = profile[profile.len() - 1];
    assert!(approx(first.x, shell.top_radius));
    assert!(approx(first.y, shell.top_y));
    assert!(approx(last.x, shell.bottom_radius));
    assert!(approx(last.y, shell.bottom_y));

    // The belly peaks halfway down.
    let mid = profile[SHELL_PROFILE_STEPS / 2];
    let linear = (shell.top_radius + shell.bottom_radius) / 2.0;
    assert!(approx(mid.x, linear + SHELL_BELLY));
}

#[test]
fn lathe_revolves_every_profile_point() {
    let geometry = FridgeGeometry::new();
    let shell = &geometry.outer_shell;
    let profile = shell.profile();
    let vertices = shell.lathe_vertices(64);
    assert_eq!(vertices.len(), 65 * profile.len());

    for (v, p) in vertices.iter().zip(profile.iter().cycle()) {
        let radius = (v[0] * v[0] + v[2] * v[2]).sqrt();
        assert!((radius - p.x).abs() < 1e-9);
        assert!(approx(v[1], p.y));
    }
    // Seam: the first ring starts on +Z.
    assert!(approx(vertices[0][0], 0.0));
    assert!(approx(vertices[0][2], profile[0].x));
}

#[test]
fn model_extent_and_camera() {
    let geometry = FridgeGeometry::new();
    let top = geometry.model_top();
    let bottom = geometry.model_bottom();
    assert!(top > bottom);
    assert!(approx(
        top,
        geometry.electronics_box.y + geometry.electronics_box.height / 2.0
    ));
    assert!(approx(
        bottom,
        geometry.qpu_chip.y - geometry.qpu_chip.height / 2.0
    ));

    let camera = geometry.camera();
    assert!(approx(camera.target[1], (top + bottom) / 2.0));
    assert_eq!(camera.position[2], 8.5);
    assert_eq!(camera.fov_deg, 45.0);
    assert!(!camera.enable_pan && !camera.enable_zoom);
}

#[test]
fn plates_descend_and_shrink() {
    let geometry = FridgeGeometry::new();
    assert_eq!(geometry.plates.len(), 5);
    for pair in geometry.plates.windows(2) {
        assert!(pair[0].y > pair[1].y);
        assert!(pair[0].radius > pair[1].radius);
    }
    assert_eq!(geometry.plates[0].radius, 1.6);
    for plate in &geometry.plates {
        assert_eq!(plate.bolt_offsets().len(), BOLT_COUNT);
        assert!(approx(plate.bolt_height(), 0.03 + plate.thickness));
    }
}

#[test]
fn rods_and_wiring() {
    let geometry = FridgeGeometry::new();
    for seg in &geometry.rod_segments {
        let rods = seg.rods();
        assert_eq!(rods.len(), RODS_PER_SET);
        for rod in rods {
            let d = (rod.position[0].powi(2) + rod.position[2].powi(2)).sqrt();
            assert!(approx(d, seg.rod_distance()));
        }
    }

    assert_eq!(geometry.wiring_lines.len(), 6);
    let (top, bottom) = geometry.wiring_span();
    assert_eq!(top, geometry.plates[0].y);
    assert_eq!(bottom, geometry.plates[4].y);
}

#[test]
fn labels() {
    let geometry = FridgeGeometry::new();
    assert_eq!(geometry.temp_labels.len(), geometry.plates.len());
    assert_eq!(geometry.temp_labels[0].text, "300 K");
    assert!(approx(
        geometry.temp_labels[0].position[0],
        geometry.plates[0].radius + 0.35
    ));

    let numbers: Vec<usize> = geometry.number_labels.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    let catalog = ComponentCatalog::for_view(ViewId::Fridge);
    for label in &geometry.number_labels {
        assert_eq!(catalog.number_of(label.component_key), Some(label.number));
    }
}
