use crate::chart::*;
use crate::geom::point;
use crate::*;

#[test]
fn category_totals_sum_to_material_total() {
    let catalog = MaterialCatalog::bundled();
    let categories = aggregate_categories(catalog.iter());
    let by_category: f64 = categories.iter().map(|c| c.total).sum();
    assert!((by_category - catalog.total_percentage()).abs() < 1e-9);
    let count: usize = categories.iter().map(|c| c.count).sum();
    assert_eq!(count, catalog.len());
}

#[test]
fn categories_sort_by_total_descending() {
    let categories = aggregate_categories(MaterialCatalog::bundled().iter());
    let names: Vec<_> = categories.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Substrates",
            "Superconductors",
            "Thermal Management",
            "Spin Qubits",
            "Interconnects",
            "Shielding",
            "Insulation",
            "Cryogenics",
            "Trapped Ions",
            "Neutral Atoms",
        ]
    );
    assert_eq!(categories[1].count, 5);
}

#[test]
fn equal_totals_keep_first_seen_order() {
    let categories = aggregate_categories(
        MaterialCatalog::bundled()
            .iter()
            .filter(|m| m.name == "Rubidium" || m.name == "Helium-3"),
    );
    let names: Vec<_> = categories.iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Cryogenics", "Neutral Atoms"]);
}

#[test]
fn pie_segments_cover_the_full_circle() {
    let catalog = MaterialCatalog::bundled();
    let categories = aggregate_categories(catalog.iter());
    let segments = pie_segments(&categories, catalog.total_percentage());
    assert_eq!(segments.len(), categories.len());
    assert_eq!(segments[0].start_angle, 0.0);
    let last = segments.last().unwrap();
    assert!((last.start_angle + last.angle - 360.0).abs() < 1e-9);
    assert!((segments[0].drawn_end_angle() - (segments[0].angle - 0.5)).abs() < 1e-12);
}

#[test]
fn empty_pie_has_no_segments() {
    assert!(pie_segments(&[], 0.0).is_empty());
}

#[test]
fn polar_zero_is_twelve_o_clock() {
    let p = polar_to_cartesian(point(150.0, 150.0), 120.0, 0.0);
    assert!((p.x - 150.0).abs() < 1e-9);
    assert!((p.y - 30.0).abs() < 1e-9);
    let p = polar_to_cartesian(point(150.0, 150.0), 120.0, 90.0);
    assert!((p.x - 270.0).abs() < 1e-9);
    assert!((p.y - 150.0).abs() < 1e-9);
}

#[test]
fn large_arc_flag_switches_past_half_circle() {
    let c = point(150.0, 150.0);
    assert!(!describe_arc(c, 120.0, 0.0, 180.0).large_arc);
    assert!(describe_arc(c, 120.0, 0.0, 180.5).large_arc);
    let arc = describe_arc(c, 120.0, 0.0, 90.0);
    // Drawn from the end angle back to the start angle.
    assert!((arc.start.x - 270.0).abs() < 1e-9);
    assert!((arc.end.y - 30.0).abs() < 1e-9);
}

#[test]
fn top_materials_are_limited_and_ordered() {
    let top = top_materials(&MaterialCatalog::bundled(), TOP_MATERIALS_LIMIT);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].name, "Silicon");
    assert_eq!(top[1].name, "Sapphire (Al₂O₃)");
    assert_eq!(relative_width(top[0].chip_percentage, top[0].chip_percentage), 100.0);
    assert_eq!(relative_width(1.0, 0.0), 0.0);
}

#[test]
fn category_colors_fall_back() {
    assert_eq!(category_color_token("Interconnects"), Some("accent"));
    assert_eq!(category_color_token("Photonics"), None);
}
