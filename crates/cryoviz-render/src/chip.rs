//! Layout of the flat QPU chip diagram, in a fixed 600x520 coordinate space.
//!
//! The layout is derived from constants only; selection and hover state are applied by the
//! SVG renderer. [`ChipLayout::hit_test`] mirrors the paint order so that the topmost
//! clickable shape wins.

use cryoviz_core::geom::{Point, Rect, point, rect, rect_contains_inclusive};
use serde::Serialize;

pub const VIEWBOX_WIDTH: f64 = 600.0;
pub const VIEWBOX_HEIGHT: f64 = 520.0;

pub const QUBIT_GRID: usize = 5;
pub const QUBIT_SPACING: f64 = 44.0;
pub const QUBIT_START_X: f64 = 200.0;
pub const QUBIT_START_Y: f64 = 140.0;
pub const QUBIT_SIZE: f64 = 32.0;

pub const LABEL_RADIUS: f64 = 11.0;

pub const PINS_PER_HORIZONTAL_SIDE: usize = 10;
pub const PINS_PER_VERTICAL_SIDE: usize = 8;
const PIN_START: f64 = 95.0;
const PIN_PITCH: f64 = 44.0;

pub mod ids {
    pub const QUBIT_ARRAY: &str = "qubitArray";
    pub const CONTROL_ELECTRONICS: &str = "controlElectronics";
    pub const READOUT_RESONATORS: &str = "readoutResonators";
    pub const IO_PADS: &str = "ioPads";
    pub const SUBSTRATE: &str = "substrate";
    pub const SHIELDING: &str = "shielding";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    pub side: Side,
    pub index: usize,
    pub rect: Rect,
}

/// Quadratic bond wire from the package edge to the die edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondWire {
    pub side: Side,
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl BondWire {
    pub fn path_data(&self) -> String {
        format!(
            "M{},{} Q{},{} {},{}",
            crate::svg::fmt(self.from.x),
            crate::svg::fmt(self.from.y),
            crate::svg::fmt(self.control.x),
            crate::svg::fmt(self.control.y),
            crate::svg::fmt(self.to.x),
            crate::svg::fmt(self.to.y)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment {
        from: point(x1, y1),
        to: point(x2, y2),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TraceKind {
    Control,
    Resonator,
    BusHorizontal,
    BusVertical,
}

impl TraceKind {
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Control => "svg-trace-control",
            Self::Resonator => "svg-trace-resonator",
            Self::BusHorizontal => "svg-trace-bus-h",
            Self::BusVertical => "svg-trace-bus-v",
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            Self::Control | Self::Resonator => 0.6,
            Self::BusHorizontal | Self::BusVertical => 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trace {
    pub kind: TraceKind,
    pub segment: Segment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Qubit {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub center: Point,
}

impl Qubit {
    pub fn id(&self) -> String {
        format!("q{}", self.index)
    }

    pub fn rect(&self) -> Rect {
        let half = QUBIT_SIZE / 2.0;
        rect(self.center.x - half, self.center.y - half, QUBIT_SIZE, QUBIT_SIZE)
    }
}

/// A numbered circle that selects its component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipLabel {
    pub component_id: &'static str,
    pub number: usize,
    pub center: Point,
}

impl ChipLabel {
    pub fn contains(&self, p: Point) -> bool {
        (p - self.center).length() <= LABEL_RADIUS
    }
}

/// Result of a pointer hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitTarget {
    pub component_id: &'static str,
    /// Index of the qubit under the pointer, when the hit landed on one.
    pub qubit: Option<usize>,
}

impl HitTarget {
    fn component(component_id: &'static str) -> Self {
        Self {
            component_id,
            qubit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipLayout {
    pub package: Rect,
    pub bevel: Rect,
    pub pin_one_marker: Point,
    pub pins: Vec<Pin>,
    pub bond_wires: Vec<BondWire>,
    pub die: Rect,
    pub alignment_marks: Vec<Segment>,
    pub traces: Vec<Trace>,
    pub control_banks: [Rect; 2],
    pub control_lines: Vec<Segment>,
    pub resonator_banks: [Rect; 2],
    /// Meander path data, top bank first.
    pub resonator_meanders: Vec<String>,
    pub qubit_array: Rect,
    pub qubits: Vec<Qubit>,
    pub couplings: Vec<Segment>,
    pub labels: Vec<ChipLabel>,
}

impl Default for ChipLayout {
    fn default() -> Self {
        Self::new()
    }
}

fn pins() -> Vec<Pin> {
    let mut out = Vec::with_capacity(2 * (PINS_PER_HORIZONTAL_SIDE + PINS_PER_VERTICAL_SIDE));
    for (side, y) in [(Side::Top, 14.0), (Side::Bottom, 482.0)] {
        for i in 0..PINS_PER_HORIZONTAL_SIDE {
            let x = PIN_START + i as f64 * PIN_PITCH;
            out.push(Pin {
                side,
                index: i,
                rect: rect(x, y, 24.0, 24.0),
            });
        }
    }
    for (side, x) in [(Side::Left, 14.0), (Side::Right, 562.0)] {
        for i in 0..PINS_PER_VERTICAL_SIDE {
            let y = PIN_START + i as f64 * PIN_PITCH;
            out.push(Pin {
                side,
                index: i,
                rect: rect(x, y, 24.0, 16.0),
            });
        }
    }
    out
}

/// Wires skip the corner pins: 1..9 on the horizontal sides, 1..7 on the vertical sides.
fn bond_wires() -> Vec<BondWire> {
    let mut out = Vec::new();
    for i in 1..PINS_PER_HORIZONTAL_SIDE - 1 {
        let x = PIN_START + i as f64 * PIN_PITCH + 12.0;
        out.push(BondWire {
            side: Side::Top,
            from: point(x, 50.0),
            control: point(x, (50.0 + 88.0) / 2.0 - 8.0),
            to: point(x, 88.0),
        });
        out.push(BondWire {
            side: Side::Bottom,
            from: point(x, 470.0),
            control: point(x, (470.0 + 432.0) / 2.0 + 8.0),
            to: point(x, 432.0),
        });
    }
    for i in 1..PINS_PER_VERTICAL_SIDE - 1 {
        let y = PIN_START + i as f64 * PIN_PITCH + 8.0;
        out.push(BondWire {
            side: Side::Left,
            from: point(40.0, y),
            control: point((40.0 + 78.0) / 2.0 - 8.0, y),
            to: point(78.0, y),
        });
        out.push(BondWire {
            side: Side::Right,
            from: point(560.0, y),
            control: point((560.0 + 522.0) / 2.0 + 8.0, y),
            to: point(522.0, y),
        });
    }
    out
}

fn traces() -> Vec<Trace> {
    let mut out = Vec::new();
    for i in 0..5 {
        let y = 155.0 + i as f64 * 44.0;
        for (x1, x2) in [(170.0, 180.0), (420.0, 430.0)] {
            out.push(Trace {
                kind: TraceKind::Control,
                segment: seg(x1, y, x2, y),
            });
        }
    }
    for i in 0..5 {
        let x = 200.0 + i as f64 * 44.0;
        for (y1, y2) in [(125.0, 130.0), (390.0, 395.0)] {
            out.push(Trace {
                kind: TraceKind::Resonator,
                segment: seg(x, y1, x, y2),
            });
        }
    }
    out.push(Trace {
        kind: TraceKind::BusHorizontal,
        segment: seg(100.0, 260.0, 170.0, 260.0),
    });
    out.push(Trace {
        kind: TraceKind::BusHorizontal,
        segment: seg(430.0, 260.0, 500.0, 260.0),
    });
    out.push(Trace {
        kind: TraceKind::BusVertical,
        segment: seg(300.0, 85.0, 300.0, 100.0),
    });
    out.push(Trace {
        kind: TraceKind::BusVertical,
        segment: seg(300.0, 420.0, 300.0, 435.0),
    });
    out
}

fn resonator_meanders() -> Vec<String> {
    let mut out = Vec::with_capacity(10);
    for base in [107.0, 402.0] {
        for i in 0..5 {
            let x = 200.0 + i as f64 * 45.0;
            out.push(format!(
                "M{},{} Q{},{} {},{} Q{},{} {},{}",
                crate::svg::fmt(x),
                crate::svg::fmt(base),
                crate::svg::fmt(x + 10.0),
                crate::svg::fmt(base + 5.0),
                crate::svg::fmt(x),
                crate::svg::fmt(base + 10.0),
                crate::svg::fmt(x - 10.0),
                crate::svg::fmt(base + 15.0),
                crate::svg::fmt(x),
                crate::svg::fmt(base + 10.0)
            ));
        }
    }
    out
}

fn qubits() -> Vec<Qubit> {
    let mut out = Vec::with_capacity(QUBIT_GRID * QUBIT_GRID);
    for row in 0..QUBIT_GRID {
        for col in 0..QUBIT_GRID {
            out.push(Qubit {
                index: row * QUBIT_GRID + col,
                row,
                col,
                center: point(
                    QUBIT_START_X + col as f64 * QUBIT_SPACING,
                    QUBIT_START_Y + row as f64 * QUBIT_SPACING,
                ),
            });
        }
    }
    out
}

/// Nearest-neighbour couplers: one to the right and one below each qubit.
fn couplings(qubits: &[Qubit]) -> Vec<Segment> {
    let half = QUBIT_SIZE / 2.0;
    let mut out = Vec::new();
    for q in qubits {
        let (x, y) = (q.center.x, q.center.y);
        if q.col < QUBIT_GRID - 1 {
            out.push(seg(x + half, y, x + QUBIT_SPACING - half, y));
        }
        if q.row < QUBIT_GRID - 1 {
            out.push(seg(x, y + half, x, y + QUBIT_SPACING - half));
        }
    }
    out
}

impl ChipLayout {
    pub fn new() -> Self {
        let qubits = qubits();
        let couplings = couplings(&qubits);
        let labels = [
            (ids::QUBIT_ARRAY, 412.0, 373.0),
            (ids::CONTROL_ELECTRONICS, 135.0, 393.0),
            (ids::READOUT_RESONATORS, 398.0, 112.0),
            (ids::IO_PADS, 107.0, 26.0),
            (ids::SUBSTRATE, 510.0, 435.0),
            (ids::SHIELDING, 555.0, 475.0),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (component_id, x, y))| ChipLabel {
            component_id,
            number: i + 1,
            center: point(x, y),
        })
        .collect();

        Self {
            package: rect(30.0, 30.0, 540.0, 460.0),
            bevel: rect(36.0, 36.0, 528.0, 448.0),
            pin_one_marker: point(48.0, 48.0),
            pins: pins(),
            bond_wires: bond_wires(),
            die: rect(70.0, 70.0, 460.0, 380.0),
            alignment_marks: vec![
                seg(78.0, 78.0, 78.0, 92.0),
                seg(78.0, 78.0, 92.0, 78.0),
                seg(522.0, 78.0, 522.0, 92.0),
                seg(522.0, 78.0, 508.0, 78.0),
                seg(78.0, 442.0, 78.0, 428.0),
                seg(78.0, 442.0, 92.0, 442.0),
                seg(522.0, 442.0, 522.0, 428.0),
                seg(522.0, 442.0, 508.0, 442.0),
            ],
            traces: traces(),
            control_banks: [
                rect(100.0, 115.0, 70.0, 290.0),
                rect(430.0, 115.0, 70.0, 290.0),
            ],
            control_lines: (0..10)
                .flat_map(|i| {
                    let y = 130.0 + i as f64 * 27.0;
                    [seg(110.0, y, 160.0, y), seg(440.0, y, 490.0, y)]
                })
                .collect(),
            resonator_banks: [
                rect(185.0, 100.0, 230.0, 25.0),
                rect(185.0, 395.0, 230.0, 25.0),
            ],
            resonator_meanders: resonator_meanders(),
            qubit_array: rect(180.0, 130.0, 240.0, 260.0),
            qubits,
            couplings,
            labels,
        }
    }

    pub fn label_for(&self, component_id: &str) -> Option<&ChipLabel> {
        self.labels.iter().find(|l| l.component_id == component_id)
    }

    /// Qubit whose square contains `p`, for hover highlighting.
    pub fn qubit_at(&self, p: Point) -> Option<&Qubit> {
        self.qubits
            .iter()
            .find(|q| rect_contains_inclusive(&q.rect(), p))
    }

    /// Topmost clickable component at `p` (diagram coordinates), or `None` over the
    /// background and the non-interactive bond wires outside the package.
    pub fn hit_test(&self, p: Point) -> Option<HitTarget> {
        // Labels are painted last; later labels sit on top of earlier ones.
        if let Some(label) = self.labels.iter().rev().find(|l| l.contains(p)) {
            return Some(HitTarget::component(label.component_id));
        }
        if rect_contains_inclusive(&self.qubit_array, p) {
            return Some(HitTarget {
                component_id: ids::QUBIT_ARRAY,
                qubit: self.qubit_at(p).map(|q| q.index),
            });
        }
        if self
            .resonator_banks
            .iter()
            .any(|r| rect_contains_inclusive(r, p))
        {
            return Some(HitTarget::component(ids::READOUT_RESONATORS));
        }
        if self
            .control_banks
            .iter()
            .any(|r| rect_contains_inclusive(r, p))
        {
            return Some(HitTarget::component(ids::CONTROL_ELECTRONICS));
        }
        if rect_contains_inclusive(&self.die, p) {
            return Some(HitTarget::component(ids::SUBSTRATE));
        }
        if self
            .pins
            .iter()
            .any(|pin| rect_contains_inclusive(&pin.rect, p))
        {
            return Some(HitTarget::component(ids::IO_PADS));
        }
        if rect_contains_inclusive(&self.package, p) {
            return Some(HitTarget::component(ids::SHIELDING));
        }
        None
    }

    /// Every component id the diagram can report, in label order.
    pub fn component_ids(&self) -> Vec<&'static str> {
        self.labels.iter().map(|l| l.component_id).collect()
    }
}
