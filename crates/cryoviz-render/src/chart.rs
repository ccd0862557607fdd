//! Resolved chart models: core aggregation plus palette colours and display strings.

use crate::color;
use cryoviz_core::chart::{
    CATEGORY_FALLBACK_COLOR, CategoryTotal, TOP_MATERIAL_FALLBACK_COLOR, aggregate_categories,
    category_color_token, describe_arc, pie_segments, relative_width, top_materials,
};
use cryoviz_core::geom::point;
use cryoviz_core::utils::{fmt_js_number, to_fixed};
use cryoviz_core::{MaterialCatalog, ThemePalette};
use serde::Serialize;
use std::str::FromStr;

pub const PIE_VIEWBOX: f64 = 300.0;
pub const PIE_CENTER: f64 = 150.0;
pub const PIE_RADIUS: f64 = 120.0;
pub const PIE_HOLE_RADIUS: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    #[default]
    TopMaterials,
    ByCategory,
    Distribution,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::TopMaterials => "Top 10 Materials by System Composition",
            Self::ByCategory => "Materials by Category",
            Self::Distribution => "Category Distribution",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            Self::TopMaterials => "Top Materials",
            Self::ByCategory => "By Category",
            Self::Distribution => "Distribution",
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "top-materials" | "composition" => Ok(Self::TopMaterials),
            "category" | "by-category" | "categories" => Ok(Self::ByCategory),
            "pie" | "distribution" => Ok(Self::Distribution),
            other => Err(format!("unknown chart: {other}")),
        }
    }
}

fn category_color(palette: &ThemePalette, category: &str, fallback: &str) -> String {
    color::css_or_literal(palette, category_color_token(category), fallback)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub category: &'static str,
    pub color: String,
    pub path: String,
    /// Tooltip, e.g. `Superconductors: 12.3%`.
    pub title: String,
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total_percentage: f64,
    pub total_label: String,
}

fn wedge_path(start_angle: f64, end_angle: f64) -> String {
    let c = point(PIE_CENTER, PIE_CENTER);
    let arc = describe_arc(c, PIE_RADIUS, start_angle, end_angle);
    format!(
        "M {cx} {cy} L {sx} {sy} A {r} {r} 0 {large} 0 {ex} {ey} Z",
        cx = fmt_js_number(c.x),
        cy = fmt_js_number(c.y),
        sx = fmt_js_number(arc.start.x),
        sy = fmt_js_number(arc.start.y),
        r = fmt_js_number(PIE_RADIUS),
        large = u8::from(arc.large_arc),
        ex = fmt_js_number(arc.end.x),
        ey = fmt_js_number(arc.end.y)
    )
}

pub fn pie_chart(catalog: &MaterialCatalog, palette: &ThemePalette) -> PieChart {
    let categories = aggregate_categories(catalog.iter());
    let total = catalog.total_percentage();
    let slices = pie_segments(&categories, total)
        .into_iter()
        .map(|seg| {
            let value_label = format!("{}%", to_fixed(seg.category.total, 1));
            PieSlice {
                category: seg.category.name,
                color: category_color(palette, seg.category.name, CATEGORY_FALLBACK_COLOR),
                path: wedge_path(seg.start_angle, seg.drawn_end_angle()),
                title: format!("{}: {}", seg.category.name, value_label),
                value_label,
            }
        })
        .collect();
    PieChart {
        slices,
        total_percentage: total,
        total_label: format!("{}%", to_fixed(total, 1)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRow {
    /// 1-based rank for the top-materials chart.
    pub rank: Option<usize>,
    pub label: &'static str,
    /// Material count for category rows.
    pub count: Option<usize>,
    pub color: String,
    /// Percent of the widest bar.
    pub width_pct: f64,
    pub value_label: String,
    /// Material name to focus when the row is clicked.
    pub material: Option<&'static str>,
}

pub fn top_material_bars(
    catalog: &MaterialCatalog,
    palette: &ThemePalette,
    limit: usize,
) -> Vec<BarRow> {
    let top = top_materials(catalog, limit);
    let largest = top.first().map(|m| m.chip_percentage).unwrap_or(0.0);
    top.iter()
        .enumerate()
        .map(|(i, m)| BarRow {
            rank: Some(i + 1),
            label: m.name,
            count: None,
            color: category_color(palette, m.category, TOP_MATERIAL_FALLBACK_COLOR),
            width_pct: relative_width(m.chip_percentage, largest),
            value_label: format!("{}%", fmt_js_number(m.chip_percentage)),
            material: Some(m.name),
        })
        .collect()
}

pub fn category_bars(catalog: &MaterialCatalog, palette: &ThemePalette) -> Vec<BarRow> {
    let categories: Vec<CategoryTotal> = aggregate_categories(catalog.iter());
    let largest = categories.first().map(|c| c.total).unwrap_or(0.0);
    categories
        .iter()
        .map(|c| BarRow {
            rank: None,
            label: c.name,
            count: Some(c.count),
            color: category_color(palette, c.name, CATEGORY_FALLBACK_COLOR),
            width_pct: relative_width(c.total, largest),
            value_label: format!("{}%", to_fixed(c.total, 1)),
            material: None,
        })
        .collect()
}
