//! Serializable 3D scene description of the fridge, for a host-side WebGL/wgpu renderer.
//!
//! The scene is a pure function of geometry, the selected component and the palette. Hosts
//! raycast against meshes with `pickable == true` and report the hit's `component_key` back as
//! a component click.

use crate::color;
use crate::fridge::{
    BOLT_RADIUS, FridgeGeometry, ROD_RADIUS, SHELL_RADIAL_SEGMENTS, WIRE_RADIUS,
};
use crate::model::Vec3;
use cryoviz_core::{ComponentCatalog, ThemePalette, ViewId};
use serde::Serialize;

/// Emissive tint applied to a selected component, independent of theme.
pub const SELECTION_EMISSIVE: &str = "#c8956c";
const NO_EMISSIVE: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Geometry {
    #[serde(rename_all = "camelCase")]
    Cylinder {
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        radial_segments: usize,
        open_ended: bool,
    },
    Box {
        width: f64,
        height: f64,
        depth: f64,
    },
    Plane {
        width: f64,
        height: f64,
    },
    Circle {
        radius: f64,
        segments: usize,
    },
    #[serde(rename_all = "camelCase")]
    Ring {
        inner_radius: f64,
        outer_radius: f64,
        segments: usize,
    },
    /// Profile points are `[radius, y]`, revolved about +Y.
    Lathe {
        points: Vec<[f64; 2]>,
        segments: usize,
    },
}

impl Geometry {
    fn cylinder(radius: f64, height: f64, radial_segments: usize) -> Self {
        Self::Cylinder {
            radius_top: radius,
            radius_bottom: radius,
            height,
            radial_segments,
            open_ended: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKind {
    Standard,
    Physical,
    Basic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceMaterial {
    pub kind: MaterialKind,
    pub color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub emissive: String,
    pub emissive_intensity: f64,
    pub transparent: bool,
    pub opacity: f64,
    pub transmission: f64,
    pub double_sided: bool,
    pub depth_write: bool,
}

impl SurfaceMaterial {
    fn standard(color: String, metalness: f64, roughness: f64) -> Self {
        Self {
            kind: MaterialKind::Standard,
            color,
            metalness,
            roughness,
            emissive: NO_EMISSIVE.to_string(),
            emissive_intensity: 0.0,
            transparent: false,
            opacity: 1.0,
            transmission: 0.0,
            double_sided: false,
            depth_write: true,
        }
    }

    /// Selection glow: `intensity` when selected, none otherwise.
    fn highlighted(mut self, selected: bool, intensity: f64) -> Self {
        if selected {
            self.emissive = SELECTION_EMISSIVE.to_string();
            self.emissive_intensity = intensity;
        }
        self
    }

    fn glass(mut self, opacity: f64, transmission: f64) -> Self {
        self.kind = MaterialKind::Physical;
        self.transparent = true;
        self.opacity = opacity;
        self.transmission = transmission;
        self.double_sided = true;
        self.depth_write = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    pub name: String,
    pub component_key: Option<&'static str>,
    pub pickable: bool,
    pub position: Vec3,
    /// Euler XYZ, radians.
    pub rotation: Vec3,
    pub geometry: Geometry,
    pub material: SurfaceMaterial,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Light {
    Ambient {
        intensity: f64,
    },
    Directional {
        position: Vec3,
        intensity: f64,
    },
    Point {
        position: Vec3,
        intensity: f64,
        color: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelKind {
    Temperature,
    Number,
}

/// A screen-space HTML label anchored at a world position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLabel {
    pub kind: LabelKind,
    pub text: String,
    pub position: Vec3,
    pub component_key: Option<&'static str>,
    pub active: bool,
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneOptions {
    pub bolts: bool,
    pub rods: bool,
    pub shell_segments: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            bolts: true,
            rods: true,
            shell_segments: SHELL_RADIAL_SEGMENTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub camera: crate::fridge::CameraRig,
    pub lights: Vec<Light>,
    pub meshes: Vec<Mesh>,
    pub labels: Vec<SceneLabel>,
    pub selected_component: Option<&'static str>,
}

impl Scene {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn meshes_for(&self, component_key: &str) -> impl Iterator<Item = &Mesh> {
        self.meshes
            .iter()
            .filter(move |m| m.component_key == Some(component_key))
    }

    /// Component keys a host may receive from picking, deduplicated, in scene order.
    pub fn pickable_component_keys(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for key in self
            .meshes
            .iter()
            .filter(|m| m.pickable)
            .filter_map(|m| m.component_key)
        {
            if !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

/// Builds the scene for `selected` (a fridge component id).
///
/// Fails only when `selected` names a component the fridge catalog does not know.
pub fn build_scene(
    geometry: &FridgeGeometry,
    selected: Option<&str>,
    palette: &ThemePalette,
    options: &SceneOptions,
) -> crate::Result<Scene> {
    let selected = match selected {
        Some(id) => Some(ComponentCatalog::for_view(ViewId::Fridge).require(id)?.id),
        None => None,
    };
    let is_selected = |key: &str| selected == Some(key);

    let shell_color = color::hex(palette, "svg-fridge-shell-end");
    let copper = color::hex(palette, "svg-fridge-stage-copper-dim");
    let accent = color::hex(palette, "accent");

    let mut meshes = Vec::new();

    let shell = &geometry.outer_shell;
    meshes.push(Mesh {
        name: "outerShell".to_string(),
        component_key: Some(shell.component_key),
        pickable: false,
        position: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0],
        geometry: Geometry::Lathe {
            points: shell.profile().iter().map(|p| [p.x, p.y]).collect(),
            segments: options.shell_segments,
        },
        material: SurfaceMaterial::standard(shell_color.clone(), 0.2, 0.1).glass(
            if is_selected(shell.component_key) { 0.12 } else { 0.05 },
            0.7,
        )
        .highlighted(is_selected(shell.component_key), 0.05),
    });

    for plate in &geometry.plates {
        let selected = is_selected(plate.component_key);
        meshes.push(Mesh {
            name: format!("plate.{}", plate.key),
            component_key: Some(plate.component_key),
            pickable: true,
            position: [0.0, plate.y, 0.0],
            rotation: [0.0, 0.0, 0.0],
            geometry: Geometry::cylinder(plate.radius, plate.thickness, 64),
            material: SurfaceMaterial::standard(copper.clone(), 0.7, 0.35)
                .highlighted(selected, 0.15),
        });
        if options.bolts {
            for (i, offset) in plate.bolt_offsets().into_iter().enumerate() {
                meshes.push(Mesh {
                    name: format!("plate.{}.bolt{i}", plate.key),
                    component_key: None,
                    pickable: false,
                    position: [offset[0], plate.y + offset[1], offset[2]],
                    rotation: [0.0, 0.0, 0.0],
                    geometry: Geometry::cylinder(BOLT_RADIUS, plate.bolt_height(), 8),
                    material: SurfaceMaterial::standard(copper.clone(), 0.8, 0.3),
                });
            }
        }
    }

    for (i, s) in geometry.shields.iter().enumerate() {
        let selected = is_selected(s.component_key);
        meshes.push(Mesh {
            name: format!("shield{i}"),
            component_key: Some(s.component_key),
            pickable: false,
            position: [0.0, s.mid_y(), 0.0],
            rotation: [0.0, 0.0, 0.0],
            geometry: Geometry::Cylinder {
                radius_top: s.radius,
                radius_bottom: s.radius,
                height: s.height(),
                radial_segments: 64,
                open_ended: true,
            },
            material: SurfaceMaterial::standard(shell_color.clone(), 0.1, 0.2)
                .glass(if selected { 0.18 } else { 0.08 }, 0.6)
                .highlighted(selected, 0.08),
        });
    }

    if options.rods {
        for (si, seg) in geometry.rod_segments.iter().enumerate() {
            for (i, rod) in seg.rods().into_iter().enumerate() {
                meshes.push(Mesh {
                    name: format!("rod{si}-{i}"),
                    component_key: None,
                    pickable: false,
                    position: rod.position,
                    rotation: [0.0, 0.0, 0.0],
                    geometry: Geometry::cylinder(ROD_RADIUS, rod.height, 8),
                    material: SurfaceMaterial::standard(copper.clone(), 0.8, 0.25),
                });
            }
        }
    }

    let bx = &geometry.electronics_box;
    meshes.push(Mesh {
        name: "electronicsBox".to_string(),
        component_key: Some(bx.component_key),
        pickable: true,
        position: [0.0, bx.y, 0.0],
        rotation: [0.0, 0.0, 0.0],
        geometry: Geometry::Box {
            width: bx.width,
            height: bx.height,
            depth: bx.depth,
        },
        material: SurfaceMaterial::standard(shell_color.clone(), 0.6, 0.45)
            .highlighted(is_selected(bx.component_key), 0.12),
    });
    meshes.push(Mesh {
        name: "electronicsBox.panel".to_string(),
        component_key: None,
        pickable: false,
        position: [0.0, bx.y, bx.depth / 2.0 + 0.001],
        rotation: [0.0, 0.0, 0.0],
        geometry: Geometry::Plane {
            width: bx.width * 0.92,
            height: bx.height * 0.8,
        },
        material: SurfaceMaterial::standard("#111418".to_string(), 0.3, 0.7),
    });
    for (i, (x_off, led)) in [(-0.12, "#5a7a5a"), (-0.04, "#5a7a8a"), (0.04, "#c8956c")]
        .into_iter()
        .enumerate()
    {
        meshes.push(Mesh {
            name: format!("electronicsBox.led{i}"),
            component_key: None,
            pickable: false,
            position: [
                bx.width * -0.35 + x_off,
                bx.y + bx.height * 0.15,
                bx.depth / 2.0 + 0.005,
            ],
            rotation: [0.0, 0.0, 0.0],
            geometry: Geometry::Circle {
                radius: 0.015,
                segments: 16,
            },
            material: SurfaceMaterial {
                emissive: led.to_string(),
                emissive_intensity: 0.5,
                ..SurfaceMaterial::standard(led.to_string(), 0.0, 1.0)
            },
        });
    }

    let (wire_top, wire_bottom) = geometry.wiring_span();
    for (i, line) in geometry.wiring_lines.iter().enumerate() {
        let c = line.kind.color().to_string();
        meshes.push(Mesh {
            name: format!("wire{i}"),
            component_key: Some(line.component_key),
            pickable: true,
            position: [line.x_offset, (wire_top + wire_bottom) / 2.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            geometry: Geometry::cylinder(WIRE_RADIUS, (wire_top - wire_bottom).abs(), 6),
            material: SurfaceMaterial {
                emissive: c.clone(),
                emissive_intensity: 0.15,
                ..SurfaceMaterial::standard(c, 0.4, 0.6)
            },
        });
    }

    let vessel = &geometry.mixing_chamber_vessel;
    let chip = &geometry.qpu_chip;
    let mc_selected = is_selected(vessel.component_key);
    meshes.push(Mesh {
        name: "mixingChamber.vessel".to_string(),
        component_key: Some(vessel.component_key),
        pickable: true,
        position: [0.0, vessel.y, 0.0],
        rotation: [0.0, 0.0, 0.0],
        geometry: Geometry::cylinder(vessel.radius, vessel.height, 32),
        material: SurfaceMaterial::standard(copper.clone(), 0.65, 0.4)
            .highlighted(mc_selected, 0.15),
    });
    meshes.push(Mesh {
        name: "qpuChip".to_string(),
        component_key: Some(chip.component_key),
        pickable: true,
        position: [0.0, chip.y, 0.0],
        rotation: [0.0, 0.0, 0.0],
        geometry: Geometry::Box {
            width: chip.width,
            height: chip.height,
            depth: chip.depth,
        },
        material: SurfaceMaterial {
            emissive: accent.clone(),
            emissive_intensity: if is_selected(chip.component_key) {
                0.25
            } else {
                0.1
            },
            ..SurfaceMaterial::standard(accent.clone(), 0.5, 0.5)
        },
    });
    meshes.push(Mesh {
        name: "qpuChip.glow".to_string(),
        component_key: None,
        pickable: false,
        position: [0.0, chip.y, 0.0],
        rotation: [std::f64::consts::FRAC_PI_2, 0.0, 0.0],
        geometry: Geometry::Ring {
            inner_radius: chip.width * 0.55,
            outer_radius: chip.width * 0.8,
            segments: 32,
        },
        material: SurfaceMaterial {
            kind: MaterialKind::Basic,
            transparent: true,
            opacity: 0.08,
            double_sided: true,
            depth_write: false,
            ..SurfaceMaterial::standard(accent, 0.0, 1.0)
        },
    });

    let label_bg = color::hex(palette, "svg-fridge-temp-bg");
    let label_fg = color::hex(palette, "svg-fridge-temp-text");
    let mut labels: Vec<SceneLabel> = geometry
        .temp_labels
        .iter()
        .map(|t| SceneLabel {
            kind: LabelKind::Temperature,
            text: t.text.to_string(),
            position: t.position,
            component_key: None,
            active: false,
            background: label_bg.clone(),
            foreground: label_fg.clone(),
        })
        .collect();
    let accent_fg = color::hex(palette, "accent");
    labels.extend(geometry.number_labels.iter().map(|n| {
        let active = is_selected(n.component_key);
        SceneLabel {
            kind: LabelKind::Number,
            text: n.number.to_string(),
            position: n.position,
            component_key: Some(n.component_key),
            active,
            background: label_bg.clone(),
            foreground: if active {
                accent_fg.clone()
            } else {
                label_fg.clone()
            },
        }
    }));

    Ok(Scene {
        camera: geometry.camera(),
        lights: vec![
            Light::Ambient { intensity: 0.4 },
            Light::Directional {
                position: [3.0, 5.0, 4.0],
                intensity: 0.7,
            },
            Light::Directional {
                position: [-2.0, 3.0, -3.0],
                intensity: 0.3,
            },
            Light::Point {
                position: [0.0, -2.0, 2.0],
                intensity: 0.2,
                color: "#c8956c".to_string(),
            },
        ],
        meshes,
        labels,
        selected_component: selected,
    })
}
