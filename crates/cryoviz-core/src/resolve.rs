//! Display-name to catalog-material resolution.
//!
//! Component material lists use short display names (`"NbTi"`, `"Sapphire"`). Each view owns
//! an ordered mapping table from those names to canonical catalog names. Resolution runs in two
//! passes:
//!
//! 1. exact match of the mapped name (or the query itself when unmapped) against the catalog;
//! 2. case-insensitive substring match of the original query, first hit in catalog order.
//!
//! Catalog order is therefore part of the contract: an ambiguous query such as `"Copper"` that
//! is also a substring of `"Yttrium Barium Copper Oxide"` resolves exactly, while `"niobium"`
//! (lowercase) falls through to the substring pass and picks `"Niobium"` because it precedes
//! `"Niobium Titanium (NbTi)"` in the catalog.

use crate::catalog::{Material, MaterialCatalog, ViewId};
use serde::Serialize;

static FRIDGE_NAME_MAPPING: &[(&str, &str)] = &[
    ("Copper", "Copper"),
    ("Gold", "Gold"),
    ("Silicon", "Silicon"),
    ("Aluminum", "Aluminum"),
    ("Mu-Metal", "Mu-Metal"),
    ("Helium-4", "Helium-4"),
    ("Helium-3", "Helium-3"),
    ("NbTi", "Niobium Titanium (NbTi)"),
    ("Beryllium Copper", "Beryllium Copper"),
    ("Kapton", "Kapton (Polyimide)"),
    ("Indium", "Indium"),
    ("Niobium", "Niobium"),
];

static CHIP_NAME_MAPPING: &[(&str, &str)] = &[
    ("Aluminum", "Aluminum"),
    ("Tantalum", "Tantalum"),
    ("Niobium", "Niobium"),
    ("Silicon", "Silicon"),
    ("Sapphire", "Sapphire (Al₂O₃)"),
    ("Gold", "Gold"),
    ("Indium", "Indium"),
    ("Copper", "Copper"),
    ("Titanium Nitride", "Titanium Nitride (TiN)"),
    ("Mu-Metal", "Mu-Metal"),
    ("High-R Silicon", "Silicon"),
];

/// Ordered `(display name, canonical name)` table for a view.
pub fn name_mapping(view: ViewId) -> &'static [(&'static str, &'static str)] {
    match view {
        ViewId::Fridge => FRIDGE_NAME_MAPPING,
        ViewId::Chip => CHIP_NAME_MAPPING,
    }
}

/// Canonical name for `display` in `view`, or `display` itself when unmapped.
pub fn map_display_name<'a>(view: ViewId, display: &'a str) -> &'a str {
    name_mapping(view)
        .iter()
        .find(|(from, _)| *from == display)
        .map(|(_, to)| *to)
        .unwrap_or(display)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Substring,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialMatch {
    pub material: &'static Material,
    pub kind: MatchKind,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialResolver {
    catalog: MaterialCatalog,
}

impl MaterialResolver {
    pub fn new(catalog: MaterialCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// Resolves a component's display name in the context of `view`.
    pub fn resolve(&self, view: ViewId, query: &str) -> Option<MaterialMatch> {
        if query.trim().is_empty() {
            return None;
        }
        let mapped = map_display_name(view, query);
        if let Some(material) = self.catalog.by_name(mapped) {
            return Some(MaterialMatch {
                material,
                kind: MatchKind::Exact,
            });
        }

        let needle = query.to_lowercase();
        let hit = self
            .catalog
            .iter()
            .find(|m| m.name.to_lowercase().contains(&needle));
        match hit {
            Some(material) => {
                tracing::debug!(
                    view = %view,
                    query,
                    resolved = material.name,
                    "material resolved by substring"
                );
                Some(MaterialMatch {
                    material,
                    kind: MatchKind::Substring,
                })
            }
            None => {
                tracing::debug!(view = %view, query, "material name did not resolve");
                None
            }
        }
    }

    /// Exact catalog name only, without per-view mapping (used by cross-view navigation).
    pub fn resolve_exact(&self, name: &str) -> Option<&'static Material> {
        self.catalog.by_name(name)
    }
}
