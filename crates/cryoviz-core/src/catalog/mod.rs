//! Bundled, immutable catalogs: materials, prices and the two structural component catalogs.

mod components;
mod materials;
mod prices;

pub use components::{
    ComponentCatalog, FRIDGE_COMPONENTS, QPU_COMPONENTS, StructuralComponent, Subcomponent,
};
pub use materials::{MATERIALS, Material, MaterialCatalog, SourceCountry};
pub use prices::{PRICES, PriceEntry, PriceTable};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two structure views. Each owns a component catalog and a display-name mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Dilution refrigerator (3D scene).
    Fridge,
    /// QPU chip (flat SVG diagram).
    Chip,
}

impl ViewId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fridge => "fridge",
            Self::Chip => "chip",
        }
    }

    /// Tab label shown by hosts.
    pub fn title(self) -> &'static str {
        match self {
            Self::Fridge => "Dilution Refrigerator",
            Self::Chip => "QPU Chip",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fridge" | "structure" | "refrigerator" => Ok(Self::Fridge),
            "chip" | "qpu" => Ok(Self::Chip),
            other => Err(crate::Error::UnknownView {
                name: other.to_string(),
            }),
        }
    }
}
