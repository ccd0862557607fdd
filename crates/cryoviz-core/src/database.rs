//! Searchable materials database: category tabs, free-text search and card data.

use crate::catalog::{Material, MaterialCatalog};
use serde::Serialize;

/// Short plain-language blurb per category, shown under the active category tab.
pub fn category_description(category: &str) -> Option<&'static str> {
    Some(match category {
        "Superconductors" => {
            "Special metals cooled until they conduct electricity perfectly, with no wasted energy"
        }
        "Substrates" => {
            "The flat base that everything is built on, like a circuit board for a quantum chip"
        }
        "Interconnects" => "Tiny wires and joints that connect different parts of the chip together",
        "Thermal Management" => {
            "Materials that draw heat away so the chip stays cold enough to work"
        }
        "Cryogenics" => {
            "Gases and parts used in the giant freezer that chills the chip to near absolute zero"
        }
        "Shielding" => "Protective wrapping that blocks outside signals from disturbing the chip",
        "Insulation" => {
            "Thin layers that keep electrical signals from leaking between components"
        }
        "Spin Qubits" => {
            "Materials for a chip design that stores information in the spin of a single electron"
        }
        "Trapped Ions" => {
            "Materials for a chip design that uses individual charged atoms held in place by electric fields"
        }
        "Neutral Atoms" => {
            "Materials for a chip design that uses individual atoms held in place by laser beams"
        }
        _ => return None,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }

    pub fn matches(&self, material: &Material) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => material.category == c,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Only(c) => c,
        }
    }
}

/// Category tab plus search box state of the materials list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl MaterialFilter {
    pub fn new(category: CategoryFilter, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Switches the category tab. Choosing `All` also clears the search text.
    pub fn set_category(&mut self, category: CategoryFilter) {
        if category == CategoryFilter::All {
            self.search.clear();
        }
        self.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Category match AND case-insensitive substring of name or description.
    pub fn matches(&self, material: &Material) -> bool {
        if !self.category.matches(material) {
            return false;
        }
        let needle = self.search.to_lowercase();
        material.name.to_lowercase().contains(&needle)
            || material.description.to_lowercase().contains(&needle)
    }

    pub fn apply(&self, catalog: &MaterialCatalog) -> Vec<&'static Material> {
        catalog.iter().filter(|m| self.matches(m)).collect()
    }

    /// Description of the active category, if it is not `All`.
    pub fn category_description(&self) -> Option<&'static str> {
        match &self.category {
            CategoryFilter::All => None,
            CategoryFilter::Only(c) => category_description(c),
        }
    }
}

/// Category tabs in display order: `All` first, then catalog first-seen order.
pub fn category_tabs(catalog: &MaterialCatalog) -> Vec<&'static str> {
    let mut out = vec!["All"];
    out.extend(catalog.categories());
    out
}

/// `"Showing X of Y materials"`.
pub fn summary_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} materials")
}

/// Width (percent) of the small share bar on a material card.
pub fn card_bar_width(chip_percentage: f64) -> f64 {
    (chip_percentage * 4.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tab_clears_search() {
        let mut filter = MaterialFilter::new(CategoryFilter::Only("Shielding".into()), "mu");
        filter.set_category(CategoryFilter::All);
        assert_eq!(filter, MaterialFilter::default());
    }

    #[test]
    fn other_tabs_keep_search() {
        let mut filter = MaterialFilter::new(CategoryFilter::All, "helium");
        filter.set_category(CategoryFilter::Only("Cryogenics".into()));
        assert_eq!(filter.search, "helium");
        let hits = filter.apply(&MaterialCatalog::bundled());
        assert_eq!(
            hits.iter().map(|m| m.name).collect::<Vec<_>>(),
            vec!["Helium-3", "Helium-4"]
        );
    }

    #[test]
    fn card_bar_is_capped() {
        assert_eq!(card_bar_width(5.0), 20.0);
        assert_eq!(card_bar_width(40.0), 100.0);
    }
}
