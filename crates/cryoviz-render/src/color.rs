//! Palette token resolution with validation.

use cryoviz_core::ThemePalette;
use cryoviz_core::theme::NEUTRAL_FALLBACK;
use std::str::FromStr;

fn parse(value: &str) -> Option<svgtypes::Color> {
    svgtypes::Color::from_str(value.trim()).ok()
}

/// Resolves `token` to a CSS colour string. Missing or unparseable values become
/// [`NEUTRAL_FALLBACK`].
pub fn css(palette: &ThemePalette, token: &str) -> String {
    let raw = palette.color(token);
    if parse(raw).is_some() {
        raw.trim().to_string()
    } else {
        tracing::warn!(token, value = raw, "unparseable theme colour; using fallback");
        NEUTRAL_FALLBACK.to_string()
    }
}

/// Like [`css`] but normalised to `#rrggbb` (alpha dropped), for hosts that only take hex.
pub fn hex(palette: &ThemePalette, token: &str) -> String {
    let raw = palette.color(token);
    match parse(raw) {
        Some(c) => to_hex(c),
        None => {
            tracing::warn!(token, value = raw, "unparseable theme colour; using fallback");
            NEUTRAL_FALLBACK.to_string()
        }
    }
}

/// Literal colour to `#rrggbb`; invalid input yields the fallback.
pub fn literal_hex(value: &str) -> String {
    parse(value)
        .map(to_hex)
        .unwrap_or_else(|| NEUTRAL_FALLBACK.to_string())
}

fn to_hex(c: svgtypes::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

/// Colour for an optional token, falling back to a literal when the token is `None`.
pub fn css_or_literal(palette: &ThemePalette, token: Option<&str>, literal: &str) -> String {
    match token {
        Some(t) => css(palette, t),
        None => literal.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_values_fall_back() {
        let p = ThemePalette::dark().with_overrides([("accent", "not-a-colour")]);
        assert_eq!(css(&p, "accent"), NEUTRAL_FALLBACK);
        assert_eq!(hex(&p, "accent"), NEUTRAL_FALLBACK);
        assert_eq!(css(&p, "missing-token"), NEUTRAL_FALLBACK);
    }

    #[test]
    fn hex_normalises() {
        let p = ThemePalette::dark().with_overrides([("accent", "rgb(255, 0, 16)")]);
        assert_eq!(hex(&p, "accent"), "#ff0010");
        assert_eq!(css(&p, "accent"), "rgb(255, 0, 16)");
        assert_eq!(literal_hex("#abc"), "#aabbcc");
    }
}
