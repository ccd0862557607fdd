//! Named colour tokens for light and dark themes.
//!
//! Renderers never read ambient styling; they receive a [`ThemePalette`] explicitly and are
//! re-run when the host reports a theme change.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Colour substituted for a missing or unparseable token.
pub const NEUTRAL_FALLBACK: &str = "#888888";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(crate::Error::UnknownThemeMode {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// (token, light, dark)
static TOKENS: &[(&str, &str, &str)] = &[
    ("accent", "#b8733f", "#d9a066"),
    // Charts.
    ("data-1", "#3f6e8c", "#6fa3c7"),
    ("data-2", "#7a8a5a", "#a3b57a"),
    ("data-3", "#5a8a8a", "#7fc0c0"),
    ("data-4", "#a0643c", "#c8956c"),
    ("data-5", "#7a5a8a", "#a98bc0"),
    ("data-6", "#8a7a5a", "#bfae84"),
    ("data-7", "#8a5a6a", "#c08a9c"),
    ("data-8", "#5a6a8a", "#8a9cc4"),
    ("data-9", "#6a8a5a", "#94c083"),
    ("chart-pie-stroke", "#f4f1ec", "#14171c"),
    ("chart-pie-center", "#f4f1ec", "#14171c"),
    ("chart-pie-label", "#6b6b6b", "#8a8f98"),
    ("chart-pie-value", "#1d1d1d", "#e8e6e1"),
    // Chip diagram.
    ("svg-chip-bg-start", "#ece8e1", "#15181d"),
    ("svg-chip-bg-end", "#dcd6cc", "#0d0f12"),
    ("svg-package-start", "#4a4d52", "#2a2d33"),
    ("svg-package-end", "#2e3035", "#1a1c20"),
    ("svg-die-start", "#b9bcc2", "#3c4048"),
    ("svg-die-mid1", "#d2d5da", "#4a4f58"),
    ("svg-die-mid2", "#c4c7cd", "#434851"),
    ("svg-die-end", "#a7aab1", "#33373e"),
    ("svg-bevel-start", "#5a5d63", "#3a3d44"),
    ("svg-bevel-end", "#3a3c41", "#24262b"),
    ("svg-qubit-start", "#6fa3c7", "#4f7f9f"),
    ("svg-qubit-end", "#3f6e8c", "#2f5470"),
    ("svg-qubit-hover-start", "#e0b07c", "#e6b884"),
    ("svg-qubit-hover-end", "#b8733f", "#c8956c"),
    ("svg-control-start", "#8c7a5a", "#6a5c44"),
    ("svg-control-end", "#6a5c44", "#4a4030"),
    ("svg-resonator-start", "#5a8a8a", "#3f6a6a"),
    ("svg-resonator-end", "#7fc0c0", "#5a9090"),
    ("svg-pad-start", "#e6c35c", "#d4af37"),
    ("svg-pad-end", "#b8912a", "#9c7c22"),
    ("svg-bond-start", "#e6c35c", "#d4af37"),
    ("svg-bond-end", "#b8912a", "#9c7c22"),
    ("svg-grid-pattern", "#9a9da4", "#4a4f58"),
    ("svg-stroke-package", "#1d1e21", "#4a4d55"),
    ("svg-stroke-bevel", "#6a6d73", "#5a5d65"),
    ("svg-stroke-alignment", "#8a8d93", "#7a7d85"),
    ("svg-stroke-pin", "#8c6d1f", "#b8912a"),
    ("svg-stroke-die", "#7a7d84", "#5a5f68"),
    ("svg-stroke-control", "#5a4c34", "#8c7a5a"),
    ("svg-stroke-resonator", "#3f6a6a", "#7fc0c0"),
    ("svg-stroke-qubit-array", "#3f6e8c", "#6fa3c7"),
    ("svg-stroke-qubit", "#2f5470", "#8ab8d8"),
    ("svg-stroke-coupling", "#3f6e8c", "#6fa3c7"),
    ("svg-qubit-array-bg", "#dfe6ec", "#1c242c"),
    ("svg-qubit-jj", "#e8e6e1", "#f4f1ec"),
    ("svg-trace-control", "#c8956c", "#c8956c"),
    ("svg-trace-resonator", "#7fc0c0", "#7fc0c0"),
    ("svg-trace-bus-h", "#8a8d93", "#6a6d73"),
    ("svg-trace-bus-v", "#8a8d93", "#6a6d73"),
    ("svg-label-bg", "#f4f1ec", "#14171c"),
    ("svg-label-stroke", "#8a8d93", "#5a5d65"),
    ("svg-label-text", "#1d1d1d", "#e8e6e1"),
    ("svg-legend-qubit", "#3f6e8c", "#6fa3c7"),
    ("svg-legend-control", "#8c7a5a", "#bfae84"),
    ("svg-legend-resonator", "#5a8a8a", "#7fc0c0"),
    ("svg-legend-io", "#d4af37", "#e6c35c"),
    ("svg-legend-substrate", "#a7aab1", "#6a6f78"),
    ("svg-legend-shielding", "#4a4d52", "#8a8d93"),
    // Fridge scene.
    ("svg-fridge-stage-copper", "#b87333", "#c8956c"),
    ("svg-fridge-stage-copper-dim", "#8a5a30", "#7a5a40"),
    ("svg-fridge-shell-start", "#a9b4be", "#4a5560"),
    ("svg-fridge-shell-end", "#7d8893", "#2a3038"),
    ("svg-fridge-coolant", "#5a8ab0", "#6fa3c7"),
    ("svg-fridge-coolant-dim", "#3f6a8a", "#3f5a70"),
    ("svg-fridge-wiring-rf", "#5a7a8a", "#5a7a8a"),
    ("svg-fridge-wiring-dc", "#c8956c", "#c8956c"),
    ("svg-fridge-wiring-sc", "#5a7a5a", "#5a7a5a"),
    ("svg-fridge-qpu-glow", "#d9a066", "#e6b884"),
    ("svg-fridge-temp-bg", "#f4f1ec", "#14171c"),
    ("svg-fridge-temp-text", "#1d1d1d", "#e8e6e1"),
];

/// Token name (without the leading `--`) to CSS colour string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    mode: ThemeMode,
    tokens: IndexMap<String, String>,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl ThemePalette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        let tokens = TOKENS
            .iter()
            .map(|(name, light, dark)| {
                let value = match mode {
                    ThemeMode::Light => *light,
                    ThemeMode::Dark => *dark,
                };
                ((*name).to_string(), value.to_string())
            })
            .collect();
        Self { mode, tokens }
    }

    pub fn light() -> Self {
        Self::for_mode(ThemeMode::Light)
    }

    pub fn dark() -> Self {
        Self::for_mode(ThemeMode::Dark)
    }

    /// Every token name a bundled palette defines.
    pub fn token_names() -> impl Iterator<Item = &'static str> {
        TOKENS.iter().map(|(name, _, _)| *name)
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Raw token lookup. A leading `--` or a `var(--x)` wrapper is accepted.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.tokens.get(normalize_token(token)).map(String::as_str)
    }

    /// Token value, or [`NEUTRAL_FALLBACK`] when the palette lacks it.
    pub fn color(&self, token: &str) -> &str {
        self.color_or(token, NEUTRAL_FALLBACK)
    }

    pub fn color_or<'a>(&'a self, token: &str, fallback: &'a str) -> &'a str {
        match self.get(token) {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                tracing::debug!(token, fallback, "theme token missing; using fallback");
                fallback
            }
        }
    }

    pub fn set(&mut self, token: &str, value: impl Into<String>) {
        self.tokens
            .insert(normalize_token(token).to_string(), value.into());
    }

    /// Applies overrides in order; later entries win.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (k, v) in overrides {
            self.set(k, v);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize_token(token: &str) -> &str {
    let t = token.trim();
    let t = t
        .strip_prefix("var(")
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(t)
        .trim();
    t.strip_prefix("--").unwrap_or(t)
}
