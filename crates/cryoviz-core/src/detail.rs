//! Side panel content derived from a [`SelectionState`].

use crate::catalog::{ComponentCatalog, Material, SourceCountry, Subcomponent, ViewId};
use crate::resolve::MaterialResolver;
use crate::selection::{Selection, SelectionState};
use crate::utils::fmt_js_number;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub number: usize,
    pub component_id: &'static str,
    pub name: &'static str,
    pub color_token: &'static str,
}

/// Legend swatch token per component, in catalog order.
pub fn legend_color_token(view: ViewId, component_id: &str) -> Option<&'static str> {
    Some(match (view, component_id) {
        (ViewId::Fridge, "roomTempElectronics") => "svg-fridge-stage-copper",
        (ViewId::Fridge, "outerVacuumChamber") => "svg-fridge-shell-start",
        (ViewId::Fridge, "upperCoolingStage") => "svg-fridge-coolant",
        (ViewId::Fridge, "lowerCoolingStage") => "svg-fridge-coolant-dim",
        (ViewId::Fridge, "wiringAndSignalLines") => "svg-fridge-wiring-rf",
        (ViewId::Fridge, "mixingChamberQPU") => "svg-fridge-stage-copper-dim",
        (ViewId::Chip, "qubitArray") => "svg-legend-qubit",
        (ViewId::Chip, "controlElectronics") => "svg-legend-control",
        (ViewId::Chip, "readoutResonators") => "svg-legend-resonator",
        (ViewId::Chip, "ioPads") => "svg-legend-io",
        (ViewId::Chip, "substrate") => "svg-legend-substrate",
        (ViewId::Chip, "shielding") => "svg-legend-shielding",
        _ => return None,
    })
}

pub fn legend(view: ViewId) -> Vec<LegendEntry> {
    ComponentCatalog::for_view(view)
        .iter()
        .enumerate()
        .map(|(i, c)| LegendEntry {
            number: i + 1,
            component_id: c.id,
            name: c.name,
            color_token: legend_color_token(view, c.id).unwrap_or("accent"),
        })
        .collect()
}

pub fn placeholder_text(view: ViewId) -> &'static str {
    match view {
        ViewId::Fridge => {
            "Click on any stage of the dilution refrigerator to learn about its role and materials"
        }
        ViewId::Chip => {
            "Click on any part of the chip diagram to see what it does and what materials it is made from"
        }
    }
}

/// A clickable material tag in the component panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTag {
    pub display_name: &'static str,
    /// `None` when the display name does not resolve; the tag is still shown.
    pub percentage_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub temperature: Option<&'static str>,
    pub description: &'static str,
    pub materials: Vec<MaterialTag>,
    pub subcomponents: &'static [Subcomponent],
    /// Label of the call-to-action that switches to the chip view.
    pub drill_down: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDetail {
    pub name: &'static str,
    pub category: &'static str,
    pub percentage_label: String,
    pub description: &'static str,
    pub sources: &'static [SourceCountry],
    /// Component the back button returns to.
    pub back_to: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DetailPanel {
    Placeholder {
        text: &'static str,
        legend: Vec<LegendEntry>,
    },
    Component(ComponentDetail),
    Material(MaterialDetail),
}

pub fn percentage_label(value: f64) -> String {
    format!("{}%", fmt_js_number(value))
}

fn material_detail(material: &'static Material, back_to: Option<&'static str>) -> MaterialDetail {
    MaterialDetail {
        name: material.name,
        category: material.category,
        percentage_label: percentage_label(material.chip_percentage),
        description: material.description,
        sources: material.source_countries,
        back_to,
    }
}

impl DetailPanel {
    pub fn from_state(state: &SelectionState) -> Self {
        let view = state.view();
        let resolver: &MaterialResolver = state.resolver();
        match state.selection() {
            Selection::Material {
                component,
                material,
            } => Self::Material(material_detail(material, component)),
            Selection::Component { .. } => match state.selected_component() {
                Some(c) => Self::Component(ComponentDetail {
                    id: c.id,
                    name: c.name,
                    temperature: c.temperature,
                    description: c.description,
                    materials: c
                        .materials
                        .iter()
                        .map(|name| MaterialTag {
                            display_name: name,
                            percentage_label: resolver
                                .resolve(view, name)
                                .map(|m| percentage_label(m.material.chip_percentage)),
                        })
                        .collect(),
                    subcomponents: c.subcomponents,
                    drill_down: c.is_drill_down.then_some("Explore QPU Chip"),
                }),
                None => Self::placeholder(view),
            },
            Selection::Idle => Self::placeholder(view),
        }
    }

    pub fn placeholder(view: ViewId) -> Self {
        Self::Placeholder {
            text: placeholder_text(view),
            legend: legend(view),
        }
    }
}
