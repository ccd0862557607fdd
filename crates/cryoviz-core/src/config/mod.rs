use crate::catalog::ViewId;
use crate::theme::{ThemeMode, ThemePalette};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host-facing viewer settings.
///
/// Unknown keys are ignored so configs can be shared with other tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub theme: ThemeMode,
    /// Token overrides applied on top of the theme's bundled palette.
    pub palette: IndexMap<String, String>,
    /// Prefix for element ids in generated SVG (gradients, patterns).
    pub diagram_id: String,
    /// Extra space around the SVG viewBox, in user units.
    pub viewbox_padding: f64,
    pub initial_view: ViewId,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            palette: IndexMap::new(),
            diagram_id: "cryoviz".to_string(),
            viewbox_padding: 0.0,
            initial_view: ViewId::Fridge,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::ConfigYaml {
            message: e.to_string(),
        })
    }

    /// Picks the decoder from a file name: `.yaml`/`.yml` is YAML, anything else JSON.
    pub fn from_named_str(file_name: &str, text: &str) -> Result<Self> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::from_yaml_str(text)
        } else {
            Self::from_json_str(text)
        }
    }

    /// Layers `overrides` (a partial config object) over `self`. Nested objects merge
    /// key-by-key; everything else is replaced.
    pub fn merged_with(&self, overrides: &Value) -> Result<Self> {
        let mut base = serde_json::to_value(self)?;
        deep_merge_value(&mut base, overrides);
        Ok(serde_json::from_value(base)?)
    }

    /// The bundled palette for [`Self::theme`] with [`Self::palette`] applied.
    pub fn palette(&self) -> ThemePalette {
        ThemePalette::for_mode(self.theme)
            .with_overrides(self.palette.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(incoming_map)) => {
            for (k, v) in incoming_map {
                match base_map.get_mut(k) {
                    Some(slot) => deep_merge_value(slot, v),
                    None => {
                        base_map.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (base_slot, v) => {
            *base_slot = v.clone();
        }
    }
}

/// Builds a one-key override object for a dotted path (`"palette.accent"`).
pub fn override_at(dotted_path: &str, value: Value) -> Value {
    let mut out = value;
    for seg in dotted_path.rsplit('.') {
        let mut map = Map::new();
        map.insert(seg.to_string(), out);
        out = Value::Object(map);
    }
    out
}
