//! Category aggregation and pie/bar geometry for the materials charts.

use crate::catalog::{Material, MaterialCatalog};
use crate::geom::{Point, point};
use indexmap::IndexMap;
use serde::Serialize;

/// Degrees trimmed off every pie sweep so neighbouring slices show a hairline gap.
pub const PIE_SEGMENT_GAP_DEG: f64 = 0.5;

pub const TOP_MATERIALS_LIMIT: usize = 10;

/// Colour used for a category without a palette token.
pub const CATEGORY_FALLBACK_COLOR: &str = "#666";

/// Colour used for a top-materials bar whose category has no palette token.
pub const TOP_MATERIAL_FALLBACK_COLOR: &str = "#6366f1";

/// Palette token (without the `--` prefix) for a category.
pub fn category_color_token(category: &str) -> Option<&'static str> {
    Some(match category {
        "Superconductors" => "data-1",
        "Substrates" => "data-2",
        "Interconnects" => "accent",
        "Thermal Management" => "data-4",
        "Cryogenics" => "data-3",
        "Shielding" => "data-6",
        "Insulation" => "data-7",
        "Spin Qubits" => "data-5",
        "Trapped Ions" => "data-8",
        "Neutral Atoms" => "data-9",
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: &'static str,
    pub total: f64,
    pub count: usize,
}

/// Sums `chip_percentage` per category.
///
/// Categories are collected in first-seen catalog order, then stably sorted by total,
/// largest first, so equal totals keep that order.
pub fn aggregate_categories<'a, I>(materials: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Material>,
{
    let mut acc: IndexMap<&'static str, CategoryTotal> = IndexMap::new();
    for m in materials {
        let entry = acc.entry(m.category).or_insert_with(|| CategoryTotal {
            name: m.category,
            total: 0.0,
            count: 0,
        });
        entry.total += m.chip_percentage;
        entry.count += 1;
    }
    let mut out: Vec<CategoryTotal> = acc.into_values().collect();
    out.sort_by(|a, b| b.total.total_cmp(&a.total));
    out
}

/// The `limit` largest materials by `chip_percentage`; ties keep catalog order.
pub fn top_materials(catalog: &MaterialCatalog, limit: usize) -> Vec<&'static Material> {
    let mut out: Vec<&'static Material> = catalog.iter().collect();
    out.sort_by(|a, b| b.chip_percentage.total_cmp(&a.chip_percentage));
    out.truncate(limit);
    out
}

/// Bar width in percent of the widest bar. Returns 0 when the reference is not positive.
pub fn relative_width(value: f64, largest: f64) -> f64 {
    if largest > 0.0 {
        value / largest * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSegment {
    pub category: CategoryTotal,
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    pub angle: f64,
}

impl PieSegment {
    /// End angle of the drawn arc, with the slice gap applied.
    pub fn drawn_end_angle(&self) -> f64 {
        self.start_angle + self.angle - PIE_SEGMENT_GAP_DEG
    }
}

/// Lays out one slice per category, proportional to `total / sum_of_all_materials`.
///
/// `total_percentage` is the sum over materials (not over `categories`); with an empty or
/// all-zero catalog there is nothing to draw and no segments are returned.
pub fn pie_segments(categories: &[CategoryTotal], total_percentage: f64) -> Vec<PieSegment> {
    if total_percentage <= 0.0 || !total_percentage.is_finite() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(categories.len());
    let mut start_angle = 0.0;
    for cat in categories {
        let angle = (cat.total / total_percentage) * 360.0;
        out.push(PieSegment {
            category: cat.clone(),
            start_angle,
            angle,
        });
        start_angle += angle;
    }
    out
}

/// Point on a circle, with 0 degrees at 12 o'clock and angles increasing clockwise
/// (SVG y-down).
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    point(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Endpoints of a wedge drawn from `end_angle` back to `start_angle` (sweep flag 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

pub fn describe_arc(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> ArcGeometry {
    ArcGeometry {
        center,
        radius,
        start: polar_to_cartesian(center, radius, end_angle),
        end: polar_to_cartesian(center, radius, start_angle),
        large_arc: end_angle - start_angle > 180.0,
    }
}
