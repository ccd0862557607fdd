//! Raw-material cost estimate: parsed mass times static commodity price.

use crate::catalog::{Material, MaterialCatalog, PriceTable};
use crate::mass::parse_mass_to_kg;
use crate::utils::{fmt_js_number, has_fraction, js_round, to_fixed};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCost {
    pub price_per_kg: f64,
    pub mass_kg: f64,
    pub total_cost: f64,
}

/// Prices `mass_kg` of the named material. Unpriced materials cost zero.
pub fn calculate_material_cost(prices: &PriceTable, name: &str, mass_kg: f64) -> MaterialCost {
    let price_per_kg = prices.price_per_kg(name);
    MaterialCost {
        price_per_kg,
        mass_kg,
        total_cost: price_per_kg * mass_kg,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRow {
    pub material: &'static Material,
    pub price_per_kg: f64,
    pub mass_kg: f64,
    pub total_cost: f64,
    pub source: &'static str,
}

impl CostRow {
    pub fn name(&self) -> &'static str {
        self.material.name
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// Sorted by `total_cost`, most expensive first; ties keep catalog order.
    pub rows: Vec<CostRow>,
    pub total_cost: f64,
}

impl CostEstimate {
    pub fn from_catalog(catalog: &MaterialCatalog, prices: &PriceTable) -> Self {
        let mut rows: Vec<CostRow> = catalog
            .iter()
            .map(|material| {
                let mass_kg = parse_mass_to_kg(material.approximate_mass);
                let cost = calculate_material_cost(prices, material.name, mass_kg);
                CostRow {
                    material,
                    price_per_kg: cost.price_per_kg,
                    mass_kg: cost.mass_kg,
                    total_cost: cost.total_cost,
                    source: prices.source(material.name),
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));
        let total_cost = rows.iter().map(|r| r.total_cost).sum();
        Self { rows, total_cost }
    }

    pub fn bundled() -> Self {
        Self::from_catalog(&MaterialCatalog::bundled(), PriceTable::bundled())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, name: &str) -> Option<&CostRow> {
        self.rows.iter().find(|r| r.material.name == name)
    }
}

/// Adaptive currency label: `$2.8M`, `$14K`, `$1.5K`, `$8.50`, `< $0.01`, `$0.00`.
pub fn format_currency(value: f64) -> String {
    if value >= 0.01 {
        format_tiers(value)
    } else if value > 0.0 {
        "< $0.01".to_string()
    } else {
        "$0.00".to_string()
    }
}

/// Same tiers as [`format_currency`] without a zero tier: anything under a cent (including an
/// unpriced material) shows as `< $0.01`.
pub fn format_price_per_kg(value: f64) -> String {
    if value >= 0.01 {
        format_tiers(value)
    } else {
        "< $0.01".to_string()
    }
}

fn format_tiers(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${}M", to_fixed(value / 1_000_000.0, 1))
    } else if value >= 10_000.0 {
        format!("${}K", fmt_js_number(js_round(value / 1_000.0)))
    } else if value >= 1_000.0 {
        format!("${}K", to_fixed(value / 1_000.0, 1))
    } else {
        format!("${}", to_fixed(value, 2))
    }
}

/// `kg`/`g`/`mg`/`ng` label, with one decimal only when the scaled value is fractional.
/// Zero (an unparsed mass) renders as an em dash.
pub fn format_mass(mass_kg: f64) -> String {
    fn scaled(v: f64, unit: &str) -> String {
        let digits = if has_fraction(v) { 1 } else { 0 };
        format!("{} {unit}", to_fixed(v, digits))
    }

    if mass_kg >= 1.0 {
        scaled(mass_kg, "kg")
    } else if mass_kg >= 1e-3 {
        scaled(mass_kg * 1e3, "g")
    } else if mass_kg >= 1e-6 {
        scaled(mass_kg * 1e6, "mg")
    } else if mass_kg > 0.0 {
        format!("{} ng", to_fixed(mass_kg * 1e9, 0))
    } else {
        "\u{2014}".to_string()
    }
}
