use super::{FONT_FAMILY, SvgRenderOptions, escape_xml, fmt, open_svg};
use crate::chart::{
    BarRow, ChartKind, PIE_CENTER, PIE_HOLE_RADIUS, PIE_VIEWBOX, category_bars, pie_chart,
    top_material_bars,
};
use crate::color;
use crate::model::Bounds;
use cryoviz_core::chart::TOP_MATERIALS_LIMIT;
use cryoviz_core::{MaterialCatalog, ThemePalette};
use std::fmt::Write as _;

const BAR_CHART_WIDTH: f64 = 600.0;
const BAR_HEADER: f64 = 36.0;
const BAR_ROW_HEIGHT: f64 = 30.0;
const BAR_HEIGHT: f64 = 18.0;
const BAR_X: f64 = 220.0;
const BAR_MAX_WIDTH: f64 = 300.0;

pub fn render_pie_svg(
    catalog: &MaterialCatalog,
    palette: &ThemePalette,
    options: &SvgRenderOptions,
) -> String {
    let chart = pie_chart(catalog, palette);
    let prefix = options.id_prefix();
    let font = escape_xml(FONT_FAMILY);

    let mut out = String::new();
    open_svg(
        &mut out,
        Bounds::new(0.0, 0.0, PIE_VIEWBOX, PIE_VIEWBOX),
        "pie-svg",
        options,
        ChartKind::Distribution.title(),
    );
    let _ = write!(
        &mut out,
        r#"<defs><filter id="{prefix}-pieGlow" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="2" result="blur"/><feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge></filter></defs>"#
    );

    let stroke = color::css(palette, "chart-pie-stroke");
    for slice in &chart.slices {
        let _ = write!(
            &mut out,
            r#"<path class="pie-segment" data-category="{cat}" d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="2"><title>{title}</title></path>"#,
            cat = escape_xml(slice.category),
            d = slice.path,
            fill = escape_xml(&slice.color),
            title = escape_xml(&slice.title),
        );
    }

    let _ = write!(
        &mut out,
        r#"<circle cx="{c}" cy="{c}" r="{r}" fill="{fill}"/>"#,
        c = fmt(PIE_CENTER),
        r = fmt(PIE_HOLE_RADIUS),
        fill = color::css(palette, "chart-pie-center"),
    );
    let _ = write!(
        &mut out,
        r#"<text x="{c}" y="145" text-anchor="middle" fill="{fill}" font-size="11" font-family="{font}">Total</text>"#,
        c = fmt(PIE_CENTER),
        fill = color::css(palette, "chart-pie-label"),
    );
    let _ = write!(
        &mut out,
        r#"<text x="{c}" y="168" text-anchor="middle" fill="{fill}" font-size="18" font-weight="400" font-family="{font}">{total}</text>"#,
        c = fmt(PIE_CENTER),
        fill = color::css(palette, "chart-pie-value"),
        total = escape_xml(&chart.total_label),
    );
    out.push_str("</svg>");
    out
}

fn render_bars(
    rows: &[BarRow],
    kind: ChartKind,
    palette: &ThemePalette,
    options: &SvgRenderOptions,
) -> String {
    let font = escape_xml(FONT_FAMILY);
    let text = color::css(palette, "chart-pie-value");
    let muted = color::css(palette, "chart-pie-label");
    let height = BAR_HEADER + rows.len() as f64 * BAR_ROW_HEIGHT;

    let mut out = String::new();
    open_svg(
        &mut out,
        Bounds::new(0.0, 0.0, BAR_CHART_WIDTH, height),
        match kind {
            ChartKind::TopMaterials => "bar-chart",
            _ => "category-chart",
        },
        options,
        kind.title(),
    );
    let _ = write!(
        &mut out,
        r#"<text x="0" y="20" fill="{text}" font-size="14" font-family="{font}">{}</text>"#,
        escape_xml(kind.title())
    );

    for (i, row) in rows.iter().enumerate() {
        let top = BAR_HEADER + i as f64 * BAR_ROW_HEIGHT;
        let mid = top + BAR_HEIGHT / 2.0;
        let fill = escape_xml(&row.color);
        match row.material {
            Some(m) => {
                let _ = write!(
                    &mut out,
                    r#"<g class="bar-row bar-row-clickable" data-material="{}" cursor="pointer">"#,
                    escape_xml(m)
                );
            }
            None => out.push_str(r#"<g class="bar-row">"#),
        }

        let x = if let Some(rank) = row.rank {
            let _ = write!(
                &mut out,
                r#"<text class="bar-rank" x="0" y="{y}" dominant-baseline="middle" fill="{muted}" font-size="11" font-family="{font}">#{rank}</text>"#,
                y = fmt(mid),
            );
            32.0
        } else {
            let _ = write!(
                &mut out,
                r#"<rect class="category-color" x="0" y="{y}" width="10" height="10" rx="2" fill="{fill}"/>"#,
                y = fmt(mid - 5.0),
            );
            16.0
        };
        let label = match row.count {
            Some(count) => format!("{} ({count})", row.label),
            None => row.label.to_string(),
        };
        let _ = write!(
            &mut out,
            r#"<text class="bar-name" x="{x}" y="{y}" dominant-baseline="middle" fill="{text}" font-size="12" font-family="{font}">{label}</text>"#,
            x = fmt(x),
            y = fmt(mid),
            label = escape_xml(&label),
        );

        let width = BAR_MAX_WIDTH * row.width_pct / 100.0;
        let _ = write!(
            &mut out,
            r#"<rect class="bar-fill" x="{bx}" y="{y}" width="{w}" height="{h}" rx="3" fill="{fill}"/>"#,
            bx = fmt(BAR_X),
            y = fmt(top),
            w = fmt(width),
            h = fmt(BAR_HEIGHT),
        );
        let _ = write!(
            &mut out,
            r#"<text class="bar-value" x="{vx}" y="{y}" dominant-baseline="middle" fill="{text}" font-size="11" font-family="{font}">{value}</text></g>"#,
            vx = fmt(BAR_X + width + 8.0),
            y = fmt(mid),
            value = escape_xml(&row.value_label),
        );
    }
    out.push_str("</svg>");
    out
}

/// Top ten materials by share, widths relative to the first bar.
pub fn render_top_materials_svg(
    catalog: &MaterialCatalog,
    palette: &ThemePalette,
    options: &SvgRenderOptions,
) -> String {
    let rows = top_material_bars(catalog, palette, TOP_MATERIALS_LIMIT);
    render_bars(&rows, ChartKind::TopMaterials, palette, options)
}

pub fn render_category_bars_svg(
    catalog: &MaterialCatalog,
    palette: &ThemePalette,
    options: &SvgRenderOptions,
) -> String {
    let rows = category_bars(catalog, palette);
    render_bars(&rows, ChartKind::ByCategory, palette, options)
}
