use crate::cost::{calculate_material_cost, format_currency, format_mass, format_price_per_kg};
use crate::*;

#[test]
fn niobium_costs_fifteen_cents() {
    let estimate = CostEstimate::bundled();
    let row = estimate.row("Niobium").unwrap();
    assert_eq!(row.mass_kg, 0.002);
    assert_eq!(row.price_per_kg, 73.0);
    assert!((row.total_cost - 0.146).abs() < 1e-12);
    assert_eq!(format_currency(row.total_cost), "$0.15");
}

#[test]
fn rows_are_sorted_by_cost_descending() {
    let estimate = CostEstimate::bundled();
    assert_eq!(estimate.len(), 24);
    for pair in estimate.rows.windows(2) {
        assert!(pair[0].total_cost >= pair[1].total_cost);
    }
    let top: Vec<_> = estimate.rows.iter().take(4).map(|r| r.name()).collect();
    assert_eq!(top, vec!["Helium-3", "Copper", "Mu-Metal", "Gold"]);
}

#[test]
fn total_matches_recomputed_rows() {
    let estimate = CostEstimate::bundled();
    let prices = PriceTable::bundled();
    let recomputed: f64 = estimate
        .rows
        .iter()
        .map(|r| {
            calculate_material_cost(
                prices,
                r.name(),
                crate::mass::parse_mass_to_kg(r.material.approximate_mass),
            )
            .total_cost
        })
        .sum();
    assert!((estimate.total_cost - recomputed).abs() < 1e-9);
    assert!((estimate.total_cost - 12138.5696153).abs() < 1e-6);
    assert_eq!(format_currency(estimate.total_cost), "$12K");
}

#[test]
fn unpriced_materials_cost_nothing() {
    let prices = PriceTable::from_entries(&[]);
    let estimate = CostEstimate::from_catalog(&MaterialCatalog::bundled(), &prices);
    assert_eq!(estimate.total_cost, 0.0);
    assert!(estimate.rows.iter().all(|r| r.source.is_empty()));
    assert_eq!(format_currency(estimate.total_cost), "$0.00");
}

#[test]
fn currency_tiers() {
    assert_eq!(format_currency(1000.0), "$1.0K");
    assert_eq!(format_currency(10000.0), "$10K");
    assert_eq!(format_currency(1_000_000.0), "$1.0M");
    assert_eq!(format_currency(999.0), "$999.00");
    assert_eq!(format_currency(2_750_000.0), "$2.8M");
    assert_eq!(format_currency(14_499.0), "$14K");
    assert_eq!(format_currency(14_500.0), "$15K");
    assert_eq!(format_currency(0.01), "$0.01");
    assert_eq!(format_currency(0.004), "< $0.01");
    assert_eq!(format_currency(0.0), "$0.00");
}

#[test]
fn currency_rounding_follows_the_binary_value() {
    // 1.005 is stored slightly below the tie.
    assert_eq!(format_currency(1.005), "$1.00");
    assert_eq!(format_currency(0.125), "$0.13");
}

#[test]
fn price_per_kg_has_no_zero_tier() {
    assert_eq!(format_price_per_kg(0.0), "< $0.01");
    assert_eq!(format_price_per_kg(2.4), "$2.40");
    assert_eq!(format_price_per_kg(78_000.0), "$78K");
    assert_eq!(format_price_per_kg(2_000_000.0), "$2.0M");
}

#[test]
fn mass_labels() {
    assert_eq!(format_mass(100.0), "100 kg");
    assert_eq!(format_mass(1.5), "1.5 kg");
    assert_eq!(format_mass(0.002), "2 g");
    assert_eq!(format_mass(0.0015), "1.5 g");
    assert_eq!(format_mass(0.0005), "500 mg");
    assert_eq!(format_mass(1e-9), "1 ng");
    assert_eq!(format_mass(0.0), "\u{2014}");
}
