//! World-space geometry of the dilution refrigerator model.
//!
//! Every element is authored once in the pixel coordinates of the legacy 2D fridge diagram
//! (a 600 px tall drawing whose useful range starts at y = 60) and mapped into a normalized
//! world: six units tall, Y up, top at +3. Radii are scaled so the top flange is 1.6 units.

use crate::model::Vec3;
use cryoviz_core::{ComponentCatalog, ViewId};
use nalgebra::{Point2, Rotation3, Vector3};
use serde::Serialize;

/// World Y of the top of the reference range.
pub const MODEL_TOP_Y: f64 = 3.0;
const REFERENCE_Y0: f64 = 60.0;
const REFERENCE_HEIGHT: f64 = 600.0;
const WORLD_HEIGHT: f64 = 6.0;
const REFERENCE_FLANGE_RADIUS: f64 = 202.0;
const WORLD_FLANGE_RADIUS: f64 = 1.6;

pub const BOLT_COUNT: usize = 12;
pub const BOLT_RADIUS: f64 = 0.025;
pub const BOLT_HEIGHT: f64 = 0.03;
/// Bolt circle as a fraction of the plate radius.
pub const BOLT_CIRCLE: f64 = 0.88;

pub const ROD_RADIUS: f64 = 0.018;
pub const RODS_PER_SET: usize = 4;

pub const WIRE_RADIUS: f64 = 0.008;

pub const SHELL_PROFILE_STEPS: usize = 32;
pub const SHELL_RADIAL_SEGMENTS: usize = 64;
pub const SHELL_BELLY: f64 = 0.12;

pub const TEMP_LABEL_OFFSET: f64 = 0.35;

/// Maps a reference-diagram y (pixels, down) to world y (up): `[60, 660]` to `[3, -3]`.
pub fn svg_y(cy: f64) -> f64 {
    MODEL_TOP_Y - ((cy - REFERENCE_Y0) / REFERENCE_HEIGHT) * WORLD_HEIGHT
}

/// Maps a reference-diagram radius (pixels) to world units.
pub fn svg_r(rx: f64) -> f64 {
    (rx / REFERENCE_FLANGE_RADIUS) * WORLD_FLANGE_RADIUS
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plate {
    pub key: &'static str,
    pub label: &'static str,
    pub component_key: &'static str,
    pub radius: f64,
    pub thickness: f64,
    pub y: f64,
}

impl Plate {
    /// Bolt centres relative to the plate centre, evenly spaced from +X towards +Z.
    pub fn bolt_offsets(&self) -> Vec<Vec3> {
        let r = self.radius * BOLT_CIRCLE;
        (0..BOLT_COUNT)
            .map(|i| {
                let angle = (i as f64 / BOLT_COUNT as f64) * std::f64::consts::TAU;
                [angle.cos() * r, 0.0, angle.sin() * r]
            })
            .collect()
    }

    pub fn bolt_height(&self) -> f64 {
        BOLT_HEIGHT + self.thickness
    }
}

/// An open cylinder between two plates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shield {
    pub top_y: f64,
    pub bottom_y: f64,
    pub radius: f64,
    pub component_key: &'static str,
}

impl Shield {
    pub fn height(&self) -> f64 {
        (self.top_y - self.bottom_y).abs()
    }

    pub fn mid_y(&self) -> f64 {
        (self.top_y + self.bottom_y) / 2.0
    }
}

/// A set of support rods between two plates. Rods are decorative and not clickable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RodSegment {
    pub top_y: f64,
    pub bottom_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rod {
    pub position: Vec3,
    pub height: f64,
}

impl RodSegment {
    pub fn height(&self) -> f64 {
        (self.top_y - self.bottom_y).abs()
    }

    /// Distance of the rods from the axis: the mean of the two radii, or the inner radius when
    /// that mean is zero.
    pub fn rod_distance(&self) -> f64 {
        let mean = (self.inner_radius + self.outer_radius) / 2.0;
        if mean != 0.0 { mean } else { self.inner_radius }
    }

    /// [`RODS_PER_SET`] rods, evenly spaced and offset by 45 degrees.
    pub fn rods(&self) -> Vec<Rod> {
        let mid_y = (self.top_y + self.bottom_y) / 2.0;
        let dist = self.rod_distance();
        let height = self.height();
        (0..RODS_PER_SET)
            .map(|i| {
                let angle = (i as f64 / RODS_PER_SET as f64) * std::f64::consts::TAU
                    + std::f64::consts::FRAC_PI_4;
                Rod {
                    position: [angle.cos() * dist, mid_y, angle.sin() * dist],
                    height,
                }
            })
            .collect()
    }
}

/// Bell-jar vacuum chamber, revolved around the Y axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OuterShell {
    pub top_y: f64,
    pub bottom_y: f64,
    pub top_radius: f64,
    pub bottom_radius: f64,
    pub component_key: &'static str,
}

impl OuterShell {
    /// `(radius, y)` profile, top to bottom: a linear taper plus a `sin(t * pi)` belly.
    pub fn profile(&self) -> Vec<Point2<f64>> {
        (0..=SHELL_PROFILE_STEPS)
            .map(|i| {
                let t = i as f64 / SHELL_PROFILE_STEPS as f64;
                let r = self.top_radius * (1.0 - t) + self.bottom_radius * t;
                let belly = (t * std::f64::consts::PI).sin() * SHELL_BELLY;
                let y = self.top_y * (1.0 - t) + self.bottom_y * t;
                Point2::new(r + belly, y)
            })
            .collect()
    }

    /// Lathe vertices: `segments + 1` rings (the seam is duplicated), each holding every
    /// profile point rotated about +Y.
    pub fn lathe_vertices(&self, segments: usize) -> Vec<Vec3> {
        let profile = self.profile();
        let mut out = Vec::with_capacity((segments + 1) * profile.len());
        for s in 0..=segments {
            let phi = (s as f64 / segments as f64) * std::f64::consts::TAU;
            let rot = Rotation3::from_axis_angle(&Vector3::y_axis(), phi);
            for p in &profile {
                // three.js lathes start at +Z for phi = 0 and sweep towards +X.
                let v = rot * Vector3::new(0.0, p.y, p.x);
                out.push([v.x, v.y, v.z]);
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicsBox {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub y: f64,
    pub component_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixingChamberVessel {
    pub radius: f64,
    pub height: f64,
    pub y: f64,
    pub component_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QpuChip {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub y: f64,
    pub component_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireKind {
    Rf,
    Dc,
    Optical,
}

impl WireKind {
    /// Fixed wire colour (not themed).
    pub fn color(self) -> &'static str {
        match self {
            Self::Rf => "#5a7a8a",
            Self::Dc => "#c8956c",
            Self::Optical => "#5a7a5a",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WiringLine {
    pub x_offset: f64,
    pub kind: WireKind,
    pub component_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TempLabel {
    pub key: &'static str,
    pub text: &'static str,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberLabel {
    pub component_key: &'static str,
    pub number: usize,
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRig {
    pub position: Vec3,
    pub fov_deg: f64,
    pub target: Vec3,
    /// Orbit is locked to the horizon: min and max polar angle are both this value.
    pub polar_angle: f64,
    pub enable_pan: bool,
    pub enable_zoom: bool,
}

/// The complete geometry descriptor, derived from constants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FridgeGeometry {
    pub plates: Vec<Plate>,
    pub shields: Vec<Shield>,
    pub rod_segments: Vec<RodSegment>,
    pub outer_shell: OuterShell,
    pub electronics_box: ElectronicsBox,
    pub mixing_chamber_vessel: MixingChamberVessel,
    pub qpu_chip: QpuChip,
    pub wiring_lines: Vec<WiringLine>,
    pub temp_labels: Vec<TempLabel>,
    pub number_labels: Vec<NumberLabel>,
}

fn plate(
    key: &'static str,
    label: &'static str,
    component_key: &'static str,
    rx: f64,
    thickness: f64,
    cy: f64,
) -> Plate {
    Plate {
        key,
        label,
        component_key,
        radius: svg_r(rx),
        thickness,
        y: svg_y(cy),
    }
}

fn shield(top: f64, bottom: f64, rx: f64, component_key: &'static str) -> Shield {
    Shield {
        top_y: svg_y(top),
        bottom_y: svg_y(bottom),
        radius: svg_r(rx),
        component_key,
    }
}

fn rods(top: f64, bottom: f64, inner: f64, outer: f64) -> RodSegment {
    RodSegment {
        top_y: svg_y(top),
        bottom_y: svg_y(bottom),
        inner_radius: svg_r(inner),
        outer_radius: svg_r(outer),
    }
}

fn wire(x_offset: f64, kind: WireKind) -> WiringLine {
    WiringLine {
        x_offset,
        kind,
        component_key: "wiringAndSignalLines",
    }
}

impl Default for FridgeGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl FridgeGeometry {
    pub fn new() -> Self {
        let plates = vec![
            plate("topFlange", "300 K", "outerVacuumChamber", 202.0, 0.10, 99.0),
            plate("fortyK", "40 K", "upperCoolingStage", 166.0, 0.09, 229.0),
            plate("still", "~800 mK", "lowerCoolingStage", 128.0, 0.07, 356.0),
            plate("coldPlate", "~100 mK", "lowerCoolingStage", 98.0, 0.07, 428.0),
            plate("mixingChamber", "~10 mK", "mixingChamberQPU", 65.0, 0.10, 541.0),
        ];
        let shields = vec![
            shield(113.0, 200.0, 195.0, "outerVacuumChamber"),
            shield(241.0, 330.0, 152.0, "upperCoolingStage"),
            shield(366.0, 410.0, 114.0, "lowerCoolingStage"),
        ];
        let rod_segments = vec![
            rods(113.0, 217.0, 80.0, 195.0),
            rods(241.0, 346.0, 120.0, 155.0),
            rods(366.0, 418.0, 140.0, 118.0),
            rods(438.0, 527.0, 150.0, 90.0),
        ];
        let outer_shell = OuterShell {
            top_y: svg_y(99.0),
            bottom_y: svg_y(558.0),
            top_radius: svg_r(210.0),
            bottom_radius: svg_r(50.0),
            component_key: "outerVacuumChamber",
        };
        let electronics_box = ElectronicsBox {
            width: svg_r(300.0),
            height: 0.4,
            depth: svg_r(100.0),
            y: svg_y(42.0),
            component_key: "roomTempElectronics",
        };
        let mixing_chamber_vessel = MixingChamberVessel {
            radius: svg_r(53.0),
            height: 0.35,
            y: svg_y(570.0),
            component_key: "mixingChamberQPU",
        };
        let qpu_chip = QpuChip {
            width: 0.35,
            height: 0.04,
            depth: 0.25,
            y: svg_y(600.0),
            component_key: "mixingChamberQPU",
        };
        let wiring_lines = vec![
            wire(-0.15, WireKind::Rf),
            wire(0.15, WireKind::Rf),
            wire(-0.07, WireKind::Dc),
            wire(0.07, WireKind::Dc),
            wire(-0.02, WireKind::Optical),
            wire(0.02, WireKind::Optical),
        ];
        let temp_labels = plates
            .iter()
            .map(|p| TempLabel {
                key: p.key,
                text: p.label,
                position: [p.radius + TEMP_LABEL_OFFSET, p.y, 0.0],
            })
            .collect();
        let number_labels = [
            ("roomTempElectronics", -1.4, electronics_box.y),
            ("outerVacuumChamber", -1.7, svg_y(155.0)),
            ("upperCoolingStage", -1.5, svg_y(229.0)),
            ("lowerCoolingStage", -1.3, svg_y(390.0)),
            ("wiringAndSignalLines", -1.7, svg_y(290.0)),
            ("mixingChamberQPU", -0.9, svg_y(578.0)),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (component_key, x, y))| NumberLabel {
            component_key,
            number: i + 1,
            position: [x, y, 0.5],
        })
        .collect();

        Self {
            plates,
            shields,
            rod_segments,
            outer_shell,
            electronics_box,
            mixing_chamber_vessel,
            qpu_chip,
            wiring_lines,
            temp_labels,
            number_labels,
        }
    }

    /// Electronics box top edge.
    pub fn model_top(&self) -> f64 {
        self.electronics_box.y + self.electronics_box.height / 2.0
    }

    /// QPU chip bottom edge.
    pub fn model_bottom(&self) -> f64 {
        self.qpu_chip.y - self.qpu_chip.height / 2.0
    }

    pub fn model_center_y(&self) -> f64 {
        (self.model_top() + self.model_bottom()) / 2.0
    }

    /// Wiring runs from the first plate to the last.
    pub fn wiring_span(&self) -> (f64, f64) {
        let top = self.plates.first().map(|p| p.y).unwrap_or(0.0);
        let bottom = self.plates.last().map(|p| p.y).unwrap_or(0.0);
        (top, bottom)
    }

    pub fn camera(&self) -> CameraRig {
        let center = self.model_center_y();
        CameraRig {
            position: [0.0, center, 8.5],
            fov_deg: 45.0,
            target: [0.0, center, 0.0],
            polar_angle: std::f64::consts::FRAC_PI_2,
            enable_pan: false,
            enable_zoom: false,
        }
    }

    /// Every component key referenced by a clickable or labelled element, in authoring order
    /// (duplicates included).
    pub fn component_keys(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        out.extend(self.plates.iter().map(|p| p.component_key));
        out.extend(self.shields.iter().map(|s| s.component_key));
        out.push(self.outer_shell.component_key);
        out.push(self.electronics_box.component_key);
        out.push(self.mixing_chamber_vessel.component_key);
        out.push(self.qpu_chip.component_key);
        out.extend(self.wiring_lines.iter().map(|w| w.component_key));
        out.extend(self.number_labels.iter().map(|l| l.component_key));
        out
    }

    /// Keys that the fridge component catalog does not know. Empty for the bundled geometry.
    pub fn unknown_component_keys(&self) -> Vec<&'static str> {
        let catalog = ComponentCatalog::for_view(ViewId::Fridge);
        self.component_keys()
            .into_iter()
            .filter(|k| !catalog.contains(k))
            .collect()
    }
}
