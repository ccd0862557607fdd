//! Free-text mass parsing (`"~2 g"`, `"< 1 μg"`, `"100 kg"`).

use crate::utils::parse_float_prefix;
use regex::Regex;

fn mass_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    // ASCII digits, units and word boundary only.
    RE.get_or_init(|| {
        Regex::new(r"([0-9.]+)\s*([kK][gG]|[mM][gG]|[μµ][gG]|[uU][gG]|[gG])(?-u:\b)")
            .expect("valid regex")
    })
}

/// Kilograms per unit, keyed by the lowercased unit token.
pub fn unit_to_kg(unit: &str) -> Option<f64> {
    match unit {
        "kg" => Some(1.0),
        "g" => Some(1e-3),
        "mg" => Some(1e-6),
        "μg" | "µg" | "ug" => Some(1e-9),
        _ => None,
    }
}

/// Converts the first `<number><ws?><unit>` occurrence in `text` to kilograms.
///
/// Any leading qualifier (`~`, `<`, `>`) is ignored. Strings without a recognised unit, or
/// whose number does not parse, yield `0.0`; nothing here fails.
pub fn parse_mass_to_kg(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    let Some(caps) = mass_regex().captures(text) else {
        return 0.0;
    };
    let Some(value) = caps.get(1).and_then(|m| parse_float_prefix(m.as_str())) else {
        return 0.0;
    };
    let unit = caps
        .get(2)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();
    value * unit_to_kg(&unit).unwrap_or(0.0)
}
