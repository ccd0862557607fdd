//! Interactive state behind both presentations: one selection, one palette, one tilt.

use std::time::Duration;

use cryoviz_core::database::{self, CategoryFilter, MaterialFilter};
use cryoviz_core::geom::Point;
use cryoviz_core::{
    DetailPanel, Material, MaterialCatalog, Selection, SelectionState, ThemeMode, ThemePalette,
    ViewId, ViewerConfig,
};
use cryoviz_render::chart::ChartKind;
use cryoviz_render::chip::ChipLayout;
use cryoviz_render::fridge::FridgeGeometry;
use cryoviz_render::scene::{Scene, SceneOptions, build_scene};
use cryoviz_render::svg::{
    ChipSvgState, SvgRenderOptions, render_category_bars_svg, render_chip_svg, render_pie_svg,
    render_top_materials_svg,
};
use cryoviz_render::tilt::{PointerRelease, TiltController};

use super::{Result, sanitize_svg_id};

/// Delay between a chart click and the host scrolling to the materials list.
pub const SCROLL_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChipPointer {
    Down(Point),
    Move(Point),
    /// Release at a point; a release without a preceding drag is a click there.
    Up(Point),
    /// The pointer left the diagram. Ends a drag, never clicks.
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerEvent<'a> {
    ComponentClicked(&'a str),
    MaterialClicked(&'a str),
    Back,
    Close,
    SwitchView(ViewId),
    /// Fridge to chip transition; only honored for drill-down components.
    DrillDown,
    ThemeChanged(ThemeMode),
    ChartMaterialClicked(&'a str),
    ChartTabSelected(ChartKind),
    SearchChanged(&'a str),
    CategorySelected(&'a str),
    Chip(ChipPointer),
}

/// Fire-and-forget instruction for the host; the explorer never waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollIntent {
    pub target: ScrollTarget,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    MaterialsList,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEffect {
    SelectionChanged(Selection),
    ViewChanged(ViewId),
    ThemeChanged(ThemeMode),
    FilterChanged,
    ChartChanged(ChartKind),
    HoverChanged(Option<usize>),
    TiltChanged,
    Scroll(ScrollIntent),
}

#[derive(Debug, Clone)]
pub struct Explorer {
    selection: SelectionState,
    catalog: MaterialCatalog,
    overrides: Vec<(String, String)>,
    palette: ThemePalette,
    filter: MaterialFilter,
    chart: ChartKind,
    tilt: TiltController,
    hovered_qubit: Option<usize>,
    chip: ChipLayout,
    geometry: FridgeGeometry,
    svg: SvgRenderOptions,
    scene: SceneOptions,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        let mut svg = SvgRenderOptions::from_config(config);
        svg.diagram_id = Some(sanitize_svg_id(&config.diagram_id));
        Self {
            selection: SelectionState::new(config.initial_view),
            catalog: MaterialCatalog::bundled(),
            overrides: config
                .palette
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            palette: config.palette(),
            filter: MaterialFilter::default(),
            chart: ChartKind::default(),
            tilt: TiltController::new(),
            hovered_qubit: None,
            chip: ChipLayout::new(),
            geometry: FridgeGeometry::new(),
            svg,
            scene: SceneOptions::default(),
        }
    }

    pub fn view(&self) -> ViewId {
        self.selection.view()
    }

    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    pub fn selection_state(&self) -> &SelectionState {
        &self.selection
    }

    pub fn theme(&self) -> ThemeMode {
        self.palette.mode()
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn filter(&self) -> &MaterialFilter {
        &self.filter
    }

    pub fn chart(&self) -> ChartKind {
        self.chart
    }

    pub fn tilt(&self) -> &TiltController {
        &self.tilt
    }

    pub fn hovered_qubit(&self) -> Option<usize> {
        self.hovered_qubit
    }

    pub fn handle(&mut self, event: ViewerEvent<'_>) -> Vec<ExplorerEffect> {
        let before = self.selection.selection();
        let mut effects = Vec::new();
        match event {
            ViewerEvent::ComponentClicked(id) => {
                self.selection.select_component(id);
            }
            ViewerEvent::MaterialClicked(name) => {
                self.selection.select_material(name);
            }
            ViewerEvent::Back => {
                self.selection.back();
            }
            ViewerEvent::Close => {
                self.selection.close();
            }
            ViewerEvent::SwitchView(view) => self.switch_view(view, &mut effects),
            ViewerEvent::DrillDown => {
                let drill = self
                    .selection
                    .selected_component()
                    .is_some_and(|c| c.is_drill_down && self.view() == ViewId::Fridge);
                if drill {
                    self.switch_view(ViewId::Chip, &mut effects);
                } else {
                    tracing::debug!(
                        view = %self.view(),
                        selection = ?self.selection.selection(),
                        "drill-down rejected"
                    );
                }
            }
            ViewerEvent::ThemeChanged(mode) => {
                if mode != self.palette.mode() {
                    self.palette = ThemePalette::for_mode(mode).with_overrides(
                        self.overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                    );
                    effects.push(ExplorerEffect::ThemeChanged(mode));
                }
            }
            ViewerEvent::ChartMaterialClicked(name) => {
                if self.selection.focus_material(name).is_none() {
                    tracing::debug!(name, "chart material not in catalog");
                }
                if !name.is_empty() {
                    self.filter.set_search(name);
                    effects.push(ExplorerEffect::FilterChanged);
                }
                effects.push(ExplorerEffect::Scroll(ScrollIntent {
                    target: ScrollTarget::MaterialsList,
                    delay: SCROLL_DELAY,
                }));
            }
            ViewerEvent::ChartTabSelected(kind) => {
                if kind != self.chart {
                    self.chart = kind;
                    effects.push(ExplorerEffect::ChartChanged(kind));
                }
            }
            ViewerEvent::SearchChanged(search) => {
                self.filter.set_search(search);
                effects.push(ExplorerEffect::FilterChanged);
            }
            ViewerEvent::CategorySelected(category) => {
                self.filter.set_category(CategoryFilter::parse(category));
                effects.push(ExplorerEffect::FilterChanged);
            }
            ViewerEvent::Chip(pointer) => self.chip_pointer(pointer, &mut effects),
        }

        let after = self.selection.selection();
        if after != before {
            effects.insert(0, ExplorerEffect::SelectionChanged(after));
        }
        effects
    }

    fn switch_view(&mut self, view: ViewId, effects: &mut Vec<ExplorerEffect>) {
        if view == self.view() {
            return;
        }
        self.selection.switch_view(view);
        self.tilt.reset();
        self.hovered_qubit = None;
        effects.push(ExplorerEffect::ViewChanged(view));
    }

    fn chip_pointer(&mut self, pointer: ChipPointer, effects: &mut Vec<ExplorerEffect>) {
        if self.view() != ViewId::Chip {
            return;
        }
        match pointer {
            ChipPointer::Down(at) => self.tilt.pointer_down(at),
            ChipPointer::Move(at) => {
                if self.tilt.pointer_move(at) {
                    effects.push(ExplorerEffect::TiltChanged);
                }
                let hovered = self.chip.qubit_at(at).map(|q| q.index);
                if hovered != self.hovered_qubit {
                    self.hovered_qubit = hovered;
                    effects.push(ExplorerEffect::HoverChanged(hovered));
                }
            }
            ChipPointer::Up(at) => {
                if self.tilt.pointer_up() == PointerRelease::Click {
                    if let Some(hit) = self.chip.hit_test(at) {
                        self.selection.select_component(hit.component_id);
                    }
                }
            }
            ChipPointer::Leave => {
                self.tilt.pointer_up();
                if self.hovered_qubit.take().is_some() {
                    effects.push(ExplorerEffect::HoverChanged(None));
                }
            }
        }
    }

    pub fn detail_panel(&self) -> DetailPanel {
        DetailPanel::from_state(&self.selection)
    }

    pub fn visible_materials(&self) -> Vec<&'static Material> {
        self.filter.apply(&self.catalog)
    }

    pub fn summary_line(&self) -> String {
        database::summary_line(self.visible_materials().len(), self.catalog.len())
    }

    /// Fridge scene with the current selection highlighted. In the chip view nothing is
    /// highlighted.
    pub fn scene(&self) -> Result<Scene> {
        let selected = match self.view() {
            ViewId::Fridge => self.selection.selection().component_id(),
            ViewId::Chip => None,
        };
        Ok(build_scene(
            &self.geometry,
            selected,
            &self.palette,
            &self.scene,
        )?)
    }

    pub fn chip_svg(&self) -> Result<String> {
        let selected = match self.view() {
            ViewId::Chip => self.selection.selection().component_id(),
            ViewId::Fridge => None,
        };
        let state = ChipSvgState {
            selected,
            hovered_qubit: self.hovered_qubit,
            tilt: Some(&self.tilt),
        };
        Ok(render_chip_svg(&self.chip, &state, &self.palette, &self.svg)?)
    }

    /// SVG for the active chart tab.
    pub fn chart_svg(&self) -> String {
        match self.chart {
            ChartKind::TopMaterials => {
                render_top_materials_svg(&self.catalog, &self.palette, &self.svg)
            }
            ChartKind::ByCategory => {
                render_category_bars_svg(&self.catalog, &self.palette, &self.svg)
            }
            ChartKind::Distribution => render_pie_svg(&self.catalog, &self.palette, &self.svg),
        }
    }
}
