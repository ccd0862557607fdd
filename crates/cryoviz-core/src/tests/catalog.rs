use crate::catalog::{FRIDGE_COMPONENTS, QPU_COMPONENTS};
use crate::resolve::MaterialResolver;
use crate::*;

#[test]
fn bundled_catalog_has_24_materials_with_unique_names_and_ids() {
    let catalog = MaterialCatalog::bundled();
    assert_eq!(catalog.len(), 24);
    let mut names: Vec<_> = catalog.iter().map(|m| m.name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 24);
    let mut ids: Vec<_> = catalog.iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 24);
}

#[test]
fn every_material_has_a_non_negative_share_and_sources() {
    for m in MaterialCatalog::bundled().iter() {
        assert!(m.chip_percentage >= 0.0, "{}", m.name);
        assert!(!m.source_countries.is_empty(), "{}", m.name);
        for s in m.source_countries {
            assert!(s.market_share >= 0.0, "{} / {}", m.name, s.country);
        }
    }
}

#[test]
fn every_material_is_priced() {
    let prices = PriceTable::bundled();
    for m in MaterialCatalog::bundled().iter() {
        assert!(prices.get(m.name).is_some(), "{}", m.name);
    }
    assert_eq!(prices.price_per_kg("Unobtainium"), 0.0);
    assert_eq!(prices.source("Unobtainium"), "");
}

#[test]
fn categories_keep_first_seen_order() {
    let categories = MaterialCatalog::bundled().categories();
    assert_eq!(
        categories,
        vec![
            "Superconductors",
            "Substrates",
            "Interconnects",
            "Thermal Management",
            "Cryogenics",
            "Spin Qubits",
            "Shielding",
            "Insulation",
            "Trapped Ions",
            "Neutral Atoms",
        ]
    );
}

#[test]
fn component_catalogs_are_ordered_and_flag_the_drill_down() {
    let fridge: Vec<_> = FRIDGE_COMPONENTS.iter().map(|c| c.id).collect();
    assert_eq!(
        fridge,
        vec![
            "roomTempElectronics",
            "outerVacuumChamber",
            "upperCoolingStage",
            "lowerCoolingStage",
            "wiringAndSignalLines",
            "mixingChamberQPU",
        ]
    );
    let drill: Vec<_> = FRIDGE_COMPONENTS
        .iter()
        .filter(|c| c.is_drill_down)
        .map(|c| c.id)
        .collect();
    assert_eq!(drill, vec!["mixingChamberQPU"]);
    assert!(QPU_COMPONENTS.iter().all(|c| c.temperature.is_none()));
    assert_eq!(
        ComponentCatalog::for_view(ViewId::Chip).number_of("substrate"),
        Some(5)
    );
}

#[test]
fn every_component_material_resolves_in_its_view() {
    let resolver = MaterialResolver::default();
    for view in [ViewId::Fridge, ViewId::Chip] {
        for c in ComponentCatalog::for_view(view).iter() {
            for name in c.materials {
                assert!(resolver.resolve(view, name).is_some(), "{view}: {name}");
            }
            for sub in c.subcomponents {
                assert!(
                    resolver.resolve(view, sub.material).is_some(),
                    "{view}: {}",
                    sub.material
                );
            }
        }
    }
}

#[test]
fn require_reports_unknown_components() {
    let err = ComponentCatalog::for_view(ViewId::Chip)
        .require("fluxCapacitor")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown chip component: fluxCapacitor");
}

#[test]
fn view_names_parse() {
    assert_eq!("structure".parse::<ViewId>().unwrap(), ViewId::Fridge);
    assert_eq!("QPU".parse::<ViewId>().unwrap(), ViewId::Chip);
    assert!("lattice".parse::<ViewId>().is_err());
}
