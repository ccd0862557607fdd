#![forbid(unsafe_code)]

//! `cryoviz` is a headless explorer for the materials inside a superconducting quantum
//! computer.
//!
//! The core (always enabled) carries the bundled catalogs, the cost model, chart aggregation,
//! material name resolution and the selection state machine.
//!
//! # Features
//!
//! - `render`: fridge scene description, chip diagram, chart SVGs and the [`render::Explorer`]
//! - `raster`: PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use cryoviz_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use cryoviz_render::chart::ChartKind;
    pub use cryoviz_render::chip::{ChipLayout, HitTarget};
    pub use cryoviz_render::fridge::FridgeGeometry;
    pub use cryoviz_render::scene::{Scene, SceneOptions, build_scene};
    pub use cryoviz_render::svg::{
        ChipSvgState, SvgRenderOptions, render_category_bars_svg, render_chip_svg,
        render_pie_svg, render_top_materials_svg,
    };
    pub use cryoviz_render::tilt::{PointerRelease, TiltController};

    mod explorer;
    pub use explorer::{
        ChipPointer, Explorer, ExplorerEffect, SCROLL_DELAY, ScrollIntent, ScrollTarget, ViewerEvent,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    use cryoviz_core::{MaterialCatalog, ThemePalette, ViewerConfig};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] cryoviz_core::Error),
        #[error(transparent)]
        Render(#[from] cryoviz_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several diagrams can
    /// be inlined into one document without gradient id collisions.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `c-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "c-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "c-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "c" {
            return "c-untitled".to_string();
        }
        out.to_string()
    }

    /// A diagram the headless renderer can produce as SVG.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SvgDiagram {
        Chip,
        Chart(ChartKind),
    }

    /// Bundles the palette, catalog and options for one-shot rendering.
    ///
    /// Stateless apart from its configuration; interactive hosts should drive an [`Explorer`]
    /// instead.
    #[derive(Debug, Clone)]
    pub struct HeadlessRenderer {
        pub catalog: MaterialCatalog,
        pub palette: ThemePalette,
        pub svg: SvgRenderOptions,
        pub scene: SceneOptions,
        pub geometry: FridgeGeometry,
        pub chip: ChipLayout,
    }

    impl Default for HeadlessRenderer {
        fn default() -> Self {
            Self::from_config(&ViewerConfig::default())
        }
    }

    impl HeadlessRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn from_config(config: &ViewerConfig) -> Self {
            let mut svg = SvgRenderOptions::from_config(config);
            svg.diagram_id = Some(sanitize_svg_id(&config.diagram_id));
            Self {
                catalog: MaterialCatalog::bundled(),
                palette: config.palette(),
                svg,
                scene: SceneOptions::default(),
                geometry: FridgeGeometry::new(),
                chip: ChipLayout::new(),
            }
        }

        pub fn with_palette(mut self, palette: ThemePalette) -> Self {
            self.palette = palette;
            self
        }

        /// Renders `diagram`. `selected` applies to the chip diagram only and must be a chip
        /// component id.
        pub fn render_svg(&self, diagram: SvgDiagram, selected: Option<&str>) -> Result<String> {
            self.render_svg_with(diagram, selected, &self.svg)
        }

        pub fn render_svg_with(
            &self,
            diagram: SvgDiagram,
            selected: Option<&str>,
            svg: &SvgRenderOptions,
        ) -> Result<String> {
            Ok(match diagram {
                SvgDiagram::Chip => {
                    let state = ChipSvgState {
                        selected,
                        ..ChipSvgState::default()
                    };
                    render_chip_svg(&self.chip, &state, &self.palette, svg)?
                }
                SvgDiagram::Chart(ChartKind::Distribution) => {
                    render_pie_svg(&self.catalog, &self.palette, svg)
                }
                SvgDiagram::Chart(ChartKind::ByCategory) => {
                    render_category_bars_svg(&self.catalog, &self.palette, svg)
                }
                SvgDiagram::Chart(ChartKind::TopMaterials) => {
                    render_top_materials_svg(&self.catalog, &self.palette, svg)
                }
            })
        }

        pub fn render_svg_with_diagram_id(
            &self,
            diagram: SvgDiagram,
            selected: Option<&str>,
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = self.svg.clone();
            svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            self.render_svg_with(diagram, selected, &svg)
        }

        /// Fridge scene with `selected` (a fridge component id) highlighted.
        pub fn render_scene(&self, selected: Option<&str>) -> Result<Scene> {
            Ok(build_scene(
                &self.geometry,
                selected,
                &self.palette,
                &self.scene,
            )?)
        }

        #[cfg(feature = "raster")]
        pub fn render_png(
            &self,
            diagram: SvgDiagram,
            selected: Option<&str>,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(diagram, selected)?;
            raster::svg_to_png(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg(
            &self,
            diagram: SvgDiagram,
            selected: Option<&str>,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(diagram, selected)?;
            raster::svg_to_jpeg(&svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf(&self, diagram: SvgDiagram, selected: Option<&str>) -> raster::Result<Vec<u8>> {
            let svg = self.render_svg(diagram, selected)?;
            raster::svg_to_pdf(&svg)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn sanitize_svg_id_normalizes() {
            assert_eq!(sanitize_svg_id("  "), "c-untitled");
            assert_eq!(sanitize_svg_id("chip view"), "chip-view");
            assert_eq!(sanitize_svg_id("1st"), "c-1st");
            assert_eq!(sanitize_svg_id("a//b"), "a-b");
        }

        #[test]
        fn headless_renderer_renders_each_diagram() {
            let renderer = HeadlessRenderer::new();
            for diagram in [
                SvgDiagram::Chip,
                SvgDiagram::Chart(ChartKind::TopMaterials),
                SvgDiagram::Chart(ChartKind::ByCategory),
                SvgDiagram::Chart(ChartKind::Distribution),
            ] {
                let svg = renderer.render_svg(diagram, None).expect("render");
                assert!(svg.starts_with("<svg"));
                assert!(svg.ends_with("</svg>"));
            }
            assert!(renderer.render_svg(SvgDiagram::Chip, Some("nope")).is_err());
            assert!(renderer.render_scene(Some("qubitArray")).is_err());
            assert!(renderer.render_scene(Some("mixingChamberQPU")).is_ok());
        }
    }
}
