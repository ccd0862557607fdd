use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use cryoviz::CostEstimate;
use cryoviz::geom::point;
use cryoviz::render::{
    ChartKind, ChipLayout, ChipPointer, Explorer, FridgeGeometry, HeadlessRenderer, SvgDiagram,
    ViewerEvent, sanitize_svg_id,
};

fn diagrams() -> Vec<(&'static str, SvgDiagram)> {
    vec![
        ("chip", SvgDiagram::Chip),
        ("top_materials", SvgDiagram::Chart(ChartKind::TopMaterials)),
        ("by_category", SvgDiagram::Chart(ChartKind::ByCategory)),
        ("distribution", SvgDiagram::Chart(ChartKind::Distribution)),
    ]
}

fn bench_render_svg(c: &mut Criterion) {
    let renderer = HeadlessRenderer::new();

    let mut group = c.benchmark_group("render_svg");
    for (name, diagram) in diagrams() {
        let diagram_id = sanitize_svg_id(name);
        group.bench_function(name, |b| {
            b.iter(|| {
                let _svg = renderer
                    .render_svg_with_diagram_id(diagram, None, &diagram_id)
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    group.bench_function("fridge", |b| b.iter(FridgeGeometry::new));
    group.bench_function("chip_layout", |b| b.iter(ChipLayout::new));
    group.bench_function("cost_estimate", |b| b.iter(CostEstimate::bundled));
    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let renderer = HeadlessRenderer::new();

    let mut group = c.benchmark_group("scene");
    for selected in [None, Some("mixingChamberQPU")] {
        let name = selected.unwrap_or("unselected");
        group.bench_function(name, |b| {
            b.iter(|| {
                let scene = renderer.render_scene(selected).unwrap();
                let _json = scene.to_json().unwrap();
            });
        });
    }
    group.finish();
}

fn bench_explorer_session(c: &mut Criterion) {
    let events = [
        ViewerEvent::ComponentClicked("mixingChamberQPU"),
        ViewerEvent::DrillDown,
        ViewerEvent::Chip(ChipPointer::Down(point(288.0, 272.0))),
        ViewerEvent::Chip(ChipPointer::Up(point(288.0, 272.0))),
        ViewerEvent::MaterialClicked("Niobium"),
        ViewerEvent::Back,
        ViewerEvent::ChartMaterialClicked("Sapphire"),
        ViewerEvent::SearchChanged("nio"),
    ];

    let mut group = c.benchmark_group("explorer");
    group.bench_function("session", |b| {
        b.iter_batched(
            Explorer::new,
            |mut explorer| {
                for event in events {
                    let _ = explorer.handle(event);
                }
                let _svg = explorer.chip_svg().unwrap();
                let _panel = explorer.detail_panel();
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_geometry,
    bench_render_svg,
    bench_scene,
    bench_explorer_session
);
criterion_main!(benches);
