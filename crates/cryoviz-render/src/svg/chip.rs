use super::{FONT_FAMILY, SvgRenderOptions, escape_xml, fmt, open_svg};
use crate::chip::{ChipLayout, Segment, ids};
use crate::color;
use crate::model::Bounds;
use crate::tilt::TiltController;
use crate::Result;
use cryoviz_core::geom::Rect;
use cryoviz_core::{ComponentCatalog, ThemePalette, ViewId};
use std::fmt::Write as _;

/// Interaction state the chip diagram reflects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChipSvgState<'a> {
    pub selected: Option<&'a str>,
    pub hovered_qubit: Option<usize>,
    /// When set, the root element carries the tilt transform as inline style.
    pub tilt: Option<&'a TiltController>,
}

struct Ctx<'a> {
    palette: &'a ThemePalette,
    prefix: String,
    selected: Option<&'static str>,
    accent: String,
}

impl Ctx<'_> {
    fn c(&self, token: &str) -> String {
        color::css(self.palette, token)
    }

    fn url(&self, id: &str) -> String {
        format!("url(#{}-{})", self.prefix, id)
    }

    fn is_selected(&self, id: &str) -> bool {
        self.selected == Some(id)
    }

    /// `(stroke, width)` for a component outline.
    fn outline(&self, id: &str, token: &str, width: f64, selected_width: f64) -> (String, f64) {
        if self.is_selected(id) {
            (self.accent.clone(), selected_width)
        } else {
            (self.c(token), width)
        }
    }

    fn open_group(&self, out: &mut String, id: &str) {
        let class = if self.is_selected(id) {
            "chip-component selected"
        } else {
            "chip-component"
        };
        let _ = write!(
            out,
            r#"<g class="{class}" data-component="{id}" cursor="pointer">"#
        );
    }
}

fn rect_el(out: &mut String, r: &Rect, rx: f64, attrs: &str) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{rx}" ry="{rx}" {attrs}/>"#,
        fmt(r.origin.x),
        fmt(r.origin.y),
        fmt(r.size.width),
        fmt(r.size.height),
        rx = fmt(rx),
    );
}

fn line_el(out: &mut String, s: &Segment, attrs: &str) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {attrs}/>"#,
        fmt(s.from.x),
        fmt(s.from.y),
        fmt(s.to.x),
        fmt(s.to.y),
    );
}

fn gradient(out: &mut String, ctx: &Ctx<'_>, id: &str, to: (&str, &str), stops: &[(&str, &str)]) {
    let _ = write!(
        out,
        r#"<linearGradient id="{}-{id}" x1="0%" y1="0%" x2="{}" y2="{}">"#,
        ctx.prefix, to.0, to.1
    );
    for (offset, token) in stops {
        let _ = write!(
            out,
            r#"<stop offset="{offset}" stop-color="{}"/>"#,
            ctx.c(token)
        );
    }
    out.push_str("</linearGradient>");
}

fn two_stop(out: &mut String, ctx: &Ctx<'_>, id: &str, prefix: &str, to: (&str, &str)) {
    let start = format!("{prefix}-start");
    let end = format!("{prefix}-end");
    gradient(out, ctx, id, to, &[("0%", start.as_str()), ("100%", end.as_str())]);
}

fn defs(out: &mut String, ctx: &Ctx<'_>) {
    const DIAGONAL: (&str, &str) = ("100%", "100%");
    out.push_str("<defs>");
    two_stop(out, ctx, "chipBg", "svg-chip-bg", DIAGONAL);
    two_stop(out, ctx, "packageGradient", "svg-package", DIAGONAL);
    gradient(
        out,
        ctx,
        "dieGradient",
        DIAGONAL,
        &[
            ("0%", "svg-die-start"),
            ("40%", "svg-die-mid1"),
            ("60%", "svg-die-mid2"),
            ("100%", "svg-die-end"),
        ],
    );
    two_stop(out, ctx, "packageBevel", "svg-bevel", DIAGONAL);
    two_stop(out, ctx, "qubitGradient", "svg-qubit", DIAGONAL);
    two_stop(out, ctx, "qubitHover", "svg-qubit-hover", DIAGONAL);
    two_stop(out, ctx, "controlGradient", "svg-control", ("0%", "100%"));
    two_stop(out, ctx, "resonatorGradient", "svg-resonator", ("100%", "0%"));
    two_stop(out, ctx, "padGradient", "svg-pad", DIAGONAL);
    two_stop(out, ctx, "bondWireGradient", "svg-bond", DIAGONAL);
    let _ = write!(
        out,
        r#"<pattern id="{}-gridPattern" width="10" height="10" patternUnits="userSpaceOnUse"><path d="M 10 0 L 0 0 0 10" fill="none" stroke="{}" stroke-width="0.5"/></pattern>"#,
        ctx.prefix,
        ctx.c("svg-grid-pattern")
    );
    out.push_str("</defs>");
}

fn package(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let (stroke, w) = ctx.outline(ids::SHIELDING, "svg-stroke-package", 2.0, 2.5);
    ctx.open_group(out, ids::SHIELDING);
    rect_el(
        out,
        &layout.package,
        6.0,
        &format!(
            r#"fill="{}" stroke="{stroke}" stroke-width="{}""#,
            ctx.url("packageGradient"),
            fmt(w)
        ),
    );
    rect_el(
        out,
        &layout.bevel,
        4.0,
        &format!(
            r#"fill="{}" stroke="{}" stroke-width="1" opacity="0.5""#,
            ctx.url("packageBevel"),
            ctx.c("svg-stroke-bevel")
        ),
    );
    let _ = write!(
        out,
        r#"<circle cx="{}" cy="{}" r="5" fill="{}" stroke="{}" stroke-width="0.5"/>"#,
        fmt(layout.pin_one_marker.x),
        fmt(layout.pin_one_marker.y),
        ctx.c("svg-stroke-bevel"),
        ctx.c("svg-stroke-alignment")
    );
    out.push_str("</g>");
}

fn pins(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let (stroke, w) = ctx.outline(ids::IO_PADS, "svg-stroke-pin", 0.5, 1.5);
    let attrs = format!(
        r#"fill="{}" stroke="{stroke}" stroke-width="{}""#,
        ctx.url("padGradient"),
        fmt(w)
    );
    ctx.open_group(out, ids::IO_PADS);
    for pin in &layout.pins {
        rect_el(out, &pin.rect, 1.0, &attrs);
    }
    out.push_str("</g>");
}

fn bond_wires(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    out.push_str(r#"<g class="bond-wires" pointer-events="none">"#);
    for wire in &layout.bond_wires {
        let _ = write!(
            out,
            r#"<path d="{}" stroke="{}" stroke-width="0.8" fill="none" opacity="0.7"/>"#,
            wire.path_data(),
            ctx.url("bondWireGradient")
        );
    }
    out.push_str("</g>");
}

fn die(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let (stroke, w) = ctx.outline(ids::SUBSTRATE, "svg-stroke-die", 1.5, 2.0);
    ctx.open_group(out, ids::SUBSTRATE);
    rect_el(
        out,
        &layout.die,
        3.0,
        &format!(
            r#"fill="{}" stroke="{stroke}" stroke-width="{}""#,
            ctx.url("dieGradient"),
            fmt(w)
        ),
    );
    rect_el(
        out,
        &layout.die,
        3.0,
        &format!(r#"fill="{}""#, ctx.url("gridPattern")),
    );
    let mark = format!(
        r#"stroke="{}" stroke-width="1""#,
        ctx.c("svg-stroke-alignment")
    );
    for s in &layout.alignment_marks {
        line_el(out, s, &mark);
    }
    out.push_str(r#"<g class="traces" opacity="0.4">"#);
    for t in &layout.traces {
        line_el(
            out,
            &t.segment,
            &format!(
                r#"stroke="{}" stroke-width="{}""#,
                ctx.c(t.kind.color_token()),
                fmt(t.kind.stroke_width())
            ),
        );
    }
    out.push_str("</g></g>");
}

fn control(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let (stroke, w) = ctx.outline(ids::CONTROL_ELECTRONICS, "svg-stroke-control", 1.0, 2.0);
    let bank = format!(
        r#"fill="{}" fill-opacity="0.8" stroke="{stroke}" stroke-width="{}""#,
        ctx.url("controlGradient"),
        fmt(w)
    );
    let line = format!(
        r#"stroke="{}" stroke-width="1.5" stroke-linecap="round""#,
        ctx.c("svg-trace-control")
    );
    ctx.open_group(out, ids::CONTROL_ELECTRONICS);
    for r in &layout.control_banks {
        rect_el(out, r, 3.0, &bank);
    }
    for s in &layout.control_lines {
        line_el(out, s, &line);
    }
    out.push_str("</g>");
}

fn resonators(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let (stroke, w) = ctx.outline(ids::READOUT_RESONATORS, "svg-stroke-resonator", 1.0, 2.0);
    let bank = format!(
        r#"fill="{}" opacity="0.85" stroke="{stroke}" stroke-width="{}""#,
        ctx.url("resonatorGradient"),
        fmt(w)
    );
    let meander = ctx.c("svg-trace-resonator");
    ctx.open_group(out, ids::READOUT_RESONATORS);
    for r in &layout.resonator_banks {
        rect_el(out, r, 3.0, &bank);
    }
    for d in &layout.resonator_meanders {
        let _ = write!(
            out,
            r#"<path d="{d}" stroke="{meander}" stroke-width="1" fill="none"/>"#
        );
    }
    out.push_str("</g>");
}

fn qubit_array(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout, hovered: Option<usize>) {
    let (stroke, w) = ctx.outline(ids::QUBIT_ARRAY, "svg-stroke-qubit-array", 1.0, 2.0);
    ctx.open_group(out, ids::QUBIT_ARRAY);
    rect_el(
        out,
        &layout.qubit_array,
        6.0,
        &format!(
            r#"fill="{}" opacity="0.6" stroke="{stroke}" stroke-width="{}""#,
            ctx.c("svg-qubit-array-bg"),
            fmt(w)
        ),
    );

    let coupling = format!(
        r#"stroke="{}" stroke-width="1" opacity="0.5""#,
        ctx.c("svg-stroke-coupling")
    );
    for s in &layout.couplings {
        line_el(out, s, &coupling);
    }

    let jj = ctx.c("svg-qubit-jj");
    let idle_stroke = ctx.c("svg-stroke-qubit");
    for q in &layout.qubits {
        let hover = hovered == Some(q.index);
        let (fill, stroke, w) = if hover {
            (ctx.url("qubitHover"), ctx.accent.clone(), 1.5)
        } else {
            (ctx.url("qubitGradient"), idle_stroke.clone(), 0.5)
        };
        let (x, y) = (q.center.x, q.center.y);
        let _ = write!(
            out,
            r#"<g class="qubit" data-qubit="{id}">"#,
            id = q.id()
        );
        rect_el(
            out,
            &q.rect(),
            4.0,
            &format!(r#"fill="{fill}" stroke="{stroke}" stroke-width="{}""#, fmt(w)),
        );
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="8" height="4" rx="1" fill="{jj}"/><line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{jj}" stroke-width="2"/><line x1="{x}" y1="{}" x2="{x}" y2="{}" stroke="{jj}" stroke-width="1"/><rect x="{}" y="{}" width="8" height="4" rx="1" fill="{jj}"/>"#,
            fmt(x - 4.0),
            fmt(y - 8.0),
            fmt(y - 8.0),
            fmt(y - 14.0),
            fmt(y - 4.0),
            fmt(y + 4.0),
            fmt(x - 4.0),
            fmt(y + 4.0),
            x = fmt(x),
        );
        out.push_str("</g>");
    }
    out.push_str("</g>");
}

fn labels(out: &mut String, ctx: &Ctx<'_>, layout: &ChipLayout) {
    let bg = ctx.c("svg-label-bg");
    for label in &layout.labels {
        let selected = ctx.is_selected(label.component_id);
        let (stroke, w) = ctx.outline(label.component_id, "svg-label-stroke", 1.0, 1.5);
        let text = if selected {
            ctx.accent.clone()
        } else {
            ctx.c("svg-label-text")
        };
        let _ = write!(
            out,
            r#"<g class="chip-label" data-component="{id}" cursor="pointer"><circle cx="{cx}" cy="{cy}" r="11" fill="{bg}" opacity="0.9" stroke="{stroke}" stroke-width="{w}"/><text x="{cx}" y="{ty}" text-anchor="middle" dominant-baseline="middle" fill="{text}" font-size="10" font-family="{font}" font-weight="500">{n}</text></g>"#,
            id = label.component_id,
            cx = fmt(label.center.x),
            cy = fmt(label.center.y),
            ty = fmt(label.center.y + 1.0),
            w = fmt(w),
            font = escape_xml(FONT_FAMILY),
            n = label.number,
        );
    }
}

/// Renders the chip diagram.
///
/// Fails when `state.selected` is not a chip component id.
pub fn render_chip_svg(
    layout: &ChipLayout,
    state: &ChipSvgState<'_>,
    palette: &ThemePalette,
    options: &SvgRenderOptions,
) -> Result<String> {
    let selected = match state.selected {
        Some(id) => Some(ComponentCatalog::for_view(ViewId::Chip).require(id)?.id),
        None => None,
    };
    let ctx = Ctx {
        palette,
        prefix: options.id_prefix(),
        selected,
        accent: color::css(palette, "accent"),
    };

    let bounds = Bounds::new(
        0.0,
        0.0,
        crate::chip::VIEWBOX_WIDTH,
        crate::chip::VIEWBOX_HEIGHT,
    );
    let mut out = String::with_capacity(48 * 1024);
    open_svg(&mut out, bounds, "qpu-chip-svg", options, "QPU chip diagram");
    if let Some(tilt) = state.tilt {
        // Inline style on a nested group; the root keeps its viewBox semantics.
        let _ = write!(out, r#"<g style="{}">"#, escape_xml(&tilt.css_style()));
    }
    defs(&mut out, &ctx);
    let _ = write!(
        out,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        fmt(crate::chip::VIEWBOX_WIDTH),
        fmt(crate::chip::VIEWBOX_HEIGHT),
        ctx.url("chipBg")
    );
    package(&mut out, &ctx, layout);
    pins(&mut out, &ctx, layout);
    bond_wires(&mut out, &ctx, layout);
    die(&mut out, &ctx, layout);
    control(&mut out, &ctx, layout);
    resonators(&mut out, &ctx, layout);
    qubit_array(&mut out, &ctx, layout, state.hovered_qubit);
    labels(&mut out, &ctx, layout);
    if state.tilt.is_some() {
        out.push_str("</g>");
    }
    out.push_str("</svg>");
    Ok(out)
}
