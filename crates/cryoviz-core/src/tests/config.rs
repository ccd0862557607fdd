use crate::config::override_at;
use crate::*;
use serde_json::json;

#[test]
fn empty_config_uses_defaults() {
    let cfg = ViewerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ViewerConfig::default());
    assert_eq!(cfg.palette(), ThemePalette::dark());
}

#[test]
fn yaml_and_json_decode_the_same_fields() {
    let json = ViewerConfig::from_json_str(
        r##"{"theme":"light","palette":{"accent":"#123456"},"diagramId":"x","initialView":"chip"}"##,
    )
    .unwrap();
    let yaml = ViewerConfig::from_named_str(
        "viewer.yml",
        "theme: light\npalette:\n  accent: \"#123456\"\ndiagramId: x\ninitialView: chip\n",
    )
    .unwrap();
    assert_eq!(json, yaml);
    assert_eq!(json.palette().color("accent"), "#123456");
    assert_eq!(json.palette().mode(), ThemeMode::Light);
}

#[test]
fn bad_config_reports_the_decoder() {
    let err = ViewerConfig::from_json_str("{").unwrap_err();
    assert!(err.to_string().starts_with("Invalid viewer config JSON"));
    let err = ViewerConfig::from_yaml_str("theme: [").unwrap_err();
    assert!(matches!(err, Error::ConfigYaml { .. }));
    assert!(ViewerConfig::from_json_str(r#"{"theme":"sepia"}"#).is_err());
}

#[test]
fn overrides_merge_nested_objects() {
    let base = ViewerConfig::from_json_str(r##"{"palette":{"accent":"#111111","data-1":"#222222"}}"##)
        .unwrap();
    let merged = base
        .merged_with(&override_at("palette.accent", json!("#333333")))
        .unwrap();
    assert_eq!(merged.palette.get("accent").map(String::as_str), Some("#333333"));
    assert_eq!(merged.palette.get("data-1").map(String::as_str), Some("#222222"));
    let merged = merged.merged_with(&json!({"theme": "light"})).unwrap();
    assert_eq!(merged.theme, ThemeMode::Light);
}
