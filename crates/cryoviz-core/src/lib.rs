#![forbid(unsafe_code)]

//! Static catalogs and pure domain logic for the cryoviz quantum hardware explorer (headless).
//!
//! Design goals:
//! - all data is bundled and `'static`; nothing here performs I/O
//! - lookups that cannot be satisfied degrade to "not found" / zero instead of erroring
//! - deterministic outputs: catalog order is significant and preserved everywhere

pub mod catalog;
pub mod chart;
pub mod config;
pub mod cost;
pub mod database;
pub mod detail;
pub mod error;
pub mod geom;
pub mod mass;
pub mod resolve;
pub mod selection;
pub mod theme;
pub mod utils;

pub use catalog::{
    ComponentCatalog, Material, MaterialCatalog, PriceEntry, PriceTable, SourceCountry,
    StructuralComponent, Subcomponent, ViewId,
};
pub use config::ViewerConfig;
pub use cost::{CostEstimate, CostRow};
pub use detail::DetailPanel;
pub use error::{Error, Result};
pub use resolve::{MatchKind, MaterialMatch, MaterialResolver};
pub use selection::{Selection, SelectionState};
pub use theme::{ThemeMode, ThemePalette};

#[cfg(test)]
mod tests;
