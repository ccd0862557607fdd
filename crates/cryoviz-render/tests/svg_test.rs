use cryoviz_core::{MaterialCatalog, ThemePalette};
use cryoviz_render::svg::{
    ChipSvgState, render_category_bars_svg, render_chip_svg, render_pie_svg,
    render_top_materials_svg,
};
use cryoviz_render::{ChipLayout, SvgRenderOptions, TiltController};
use cryoviz_core::geom::point;

fn parse(svg: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(svg).expect("well-formed svg")
}

fn with_class<'a, 'i>(
    doc: &'a roxmltree::Document<'i>,
    class: &'a str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'i>> + 'a {
    doc.descendants()
        .filter(move |n| n.attribute("class") == Some(class))
}

#[test]
fn chip_svg_renders_every_part() {
    let svg = render_chip_svg(
        &ChipLayout::new(),
        &ChipSvgState::default(),
        &ThemePalette::dark(),
        &SvgRenderOptions::default(),
    )
    .expect("render");
    let doc = parse(&svg);

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("viewBox"), Some("0 0 600 520"));

    assert_eq!(with_class(&doc, "qubit").count(), 25);
    assert_eq!(with_class(&doc, "chip-component").count(), 6);
    assert_eq!(with_class(&doc, "chip-component selected").count(), 0);

    let labels: Vec<&str> = with_class(&doc, "chip-label")
        .filter_map(|g| g.descendants().find(|n| n.has_tag_name("text")))
        .filter_map(|t| t.text())
        .collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6"]);

    let gradients = doc
        .descendants()
        .filter(|n| n.has_tag_name("linearGradient"))
        .count();
    assert_eq!(gradients, 10);
    assert!(svg.contains(r#"id="cryoviz-gridPattern""#));
    assert!(!svg.contains("var(--"));
}

#[test]
fn chip_selection_and_hover() {
    let palette = ThemePalette::dark().with_overrides([("accent", "#ff0000")]);
    let svg = render_chip_svg(
        &ChipLayout::new(),
        &ChipSvgState {
            selected: Some("substrate"),
            hovered_qubit: Some(3),
            tilt: None,
        },
        &palette,
        &SvgRenderOptions::default(),
    )
    .expect("render");
    let doc = parse(&svg);

    let selected: Vec<_> = with_class(&doc, "chip-component selected").collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].attribute("data-component"), Some("substrate"));
    let die = selected[0]
        .children()
        .find(|n| n.has_tag_name("rect"))
        .expect("die rect");
    assert_eq!(die.attribute("stroke"), Some("#ff0000"));
    assert_eq!(die.attribute("stroke-width"), Some("2"));

    let hovered = doc
        .descendants()
        .find(|n| n.attribute("data-qubit") == Some("q3"))
        .and_then(|g| g.children().find(|n| n.has_tag_name("rect")))
        .expect("q3 rect");
    assert_eq!(hovered.attribute("fill"), Some("url(#cryoviz-qubitHover)"));
    assert_eq!(hovered.attribute("stroke"), Some("#ff0000"));
}

#[test]
fn chip_rejects_unknown_selection() {
    let err = render_chip_svg(
        &ChipLayout::new(),
        &ChipSvgState {
            selected: Some("outerVacuumChamber"),
            ..ChipSvgState::default()
        },
        &ThemePalette::dark(),
        &SvgRenderOptions::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("outerVacuumChamber"));
}

#[test]
fn chip_tilt_and_options() {
    let mut tilt = TiltController::new();
    tilt.pointer_down(point(0.0, 0.0));
    tilt.pointer_move(point(100.0, 0.0));
    let options = SvgRenderOptions {
        viewbox_padding: 10.0,
        diagram_id: Some("chipA".to_string()),
        include_title: false,
    };
    let svg = render_chip_svg(
        &ChipLayout::new(),
        &ChipSvgState {
            tilt: Some(&tilt),
            ..ChipSvgState::default()
        },
        &ThemePalette::light(),
        &options,
    )
    .expect("render");
    let doc = parse(&svg);
    assert_eq!(doc.root_element().attribute("viewBox"), Some("-10 -10 620 540"));
    assert_eq!(doc.root_element().attribute("id"), Some("chipA"));
    assert!(svg.contains("url(#chipA-dieGradient)"));
    assert!(svg.contains("rotateY(25deg)"));
    assert!(!doc.descendants().any(|n| n.has_tag_name("title")));
}

#[test]
fn pie_svg() {
    let catalog = MaterialCatalog::bundled();
    let svg = render_pie_svg(
        &catalog,
        &ThemePalette::dark(),
        &SvgRenderOptions::default(),
    );
    let doc = parse(&svg);
    assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 300 300"));

    let segments: Vec<_> = with_class(&doc, "pie-segment").collect();
    assert_eq!(segments.len(), catalog.categories().len());
    assert_eq!(segments[0].attribute("data-category"), Some("Substrates"));
    for seg in &segments {
        let d = seg.attribute("d").expect("path data");
        assert!(d.starts_with("M 150 150 L "));
        assert!(d.ends_with(" Z"));
    }

    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(texts, vec!["Total", "100.3%"]);
}

#[test]
fn top_materials_svg() {
    let catalog = MaterialCatalog::bundled();
    let svg = render_top_materials_svg(
        &catalog,
        &ThemePalette::dark(),
        &SvgRenderOptions::default(),
    );
    let doc = parse(&svg);
    let rows: Vec<_> = with_class(&doc, "bar-row bar-row-clickable").collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].attribute("data-material"), Some("Silicon"));

    let first_bar = rows[0]
        .children()
        .find(|n| n.attribute("class") == Some("bar-fill"))
        .expect("bar");
    assert_eq!(first_bar.attribute("width"), Some("300"));
    let value = rows[0]
        .children()
        .find(|n| n.attribute("class") == Some("bar-value"))
        .and_then(|n| n.text());
    assert_eq!(value, Some("25%"));
}

#[test]
fn category_bars_svg() {
    let catalog = MaterialCatalog::bundled();
    let svg = render_category_bars_svg(
        &catalog,
        &ThemePalette::light(),
        &SvgRenderOptions::default(),
    );
    let doc = parse(&svg);
    let rows: Vec<_> = with_class(&doc, "bar-row").collect();
    assert_eq!(rows.len(), catalog.categories().len());
    let name = rows[0]
        .children()
        .find(|n| n.attribute("class") == Some("bar-name"))
        .and_then(|n| n.text());
    assert_eq!(name, Some("Substrates (2)"));
}
