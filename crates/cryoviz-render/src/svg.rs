//! SVG output: the QPU chip diagram and the three materials charts.
//!
//! Every renderer writes a standalone `<svg>` document into a `String`. Colours are resolved
//! from the palette up front; the output never references CSS variables.

mod chart;
mod chip;

pub use chart::{render_category_bars_svg, render_pie_svg, render_top_materials_svg};
pub use chip::{ChipSvgState, render_chip_svg};

use crate::model::Bounds;
use cryoviz_core::ViewerConfig;
use std::fmt::Write as _;

pub const FONT_FAMILY: &str = "'DM Mono', monospace";

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the fixed viewBox.
    pub viewbox_padding: f64,
    /// Prefix for gradient, pattern and filter ids. Defaults to `cryoviz`.
    pub diagram_id: Option<String>,
    /// When true, emit a `<title>` element naming the diagram.
    pub include_title: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 0.0,
            diagram_id: None,
            include_title: true,
        }
    }
}

impl SvgRenderOptions {
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            viewbox_padding: config.viewbox_padding,
            diagram_id: Some(config.diagram_id.clone()),
            ..Self::default()
        }
    }

    pub(crate) fn id_prefix(&self) -> String {
        escape_xml(self.diagram_id.as_deref().unwrap_or("cryoviz"))
    }
}

/// Opens the root element for a drawing whose content occupies `bounds`.
pub(crate) fn open_svg(
    out: &mut String,
    bounds: Bounds,
    class: &str,
    options: &SvgRenderOptions,
    title: &str,
) {
    let pad = options.viewbox_padding.max(0.0);
    let vb = bounds.padded(pad);
    let _ = write!(
        out,
        r#"<svg id="{id}" class="{class}" xmlns="http://www.w3.org/2000/svg" viewBox="{x} {y} {w} {h}" width="{w}" height="{h}" role="img">"#,
        id = options.id_prefix(),
        class = escape_xml(class),
        x = fmt(vb.min_x),
        y = fmt(vb.min_y),
        w = fmt(vb.width()),
        h = fmt(vb.height()),
    );
    if options.include_title {
        let _ = write!(out, "<title>{}</title>", escape_xml(title));
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Number formatting for attributes: shortest round-trip form, no float noise, no `-0`.
pub fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    if v == -0.0 {
        v = 0.0;
    }
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_trims_noise() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(12.0000000001), "12");
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
