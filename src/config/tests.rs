//! Tests for the config module

use super::loader::{load_with_warnings, with_env_overrides};
use super::types::*;
use crate::error::CatalogError;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |k| map.get(k).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.pagination.page_size, 5);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[pagination]
page_size = 10

[output]
color = "never"
unicode = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.pagination.page_size, 10);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config: Config = toml::from_str("[output]\ncolor = \"always\"\n").unwrap();

    assert_eq!(config.pagination.page_size, 5);
    assert!(config.output.unicode);
}

#[test]
fn test_zero_page_size_is_rejected() {
    let config: Config = toml::from_str("[pagination]\npage_size = 0\n").unwrap();

    assert!(matches!(
        config.validate(),
        Err(CatalogError::InvalidPageSize { value: 0 })
    ));
}

#[test]
fn test_unknown_keys_produce_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog-tree.toml");
    fs::write(&path, "[pagination]\npage_sise = 8\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.pagination.page_size, 5);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "page_sise");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("page_size"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog-tree.toml");
    fs::write(&path, "[output]\ncolor = \"sometimes\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConfig { .. }));
}

#[test]
fn test_project_config_is_preferred() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("catalog-tree.toml"),
        "[pagination]\npage_size = 3\n",
    )
    .unwrap();

    let (config, used, warnings) = Config::load_or_default(Some(dir.path())).unwrap();

    assert_eq!(config.pagination.page_size, 3);
    assert_eq!(used, Some(dir.path().join("catalog-tree.toml")));
    assert!(warnings.is_empty());
}

#[test]
fn test_env_overrides_page_size_and_color() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("CATALOG_TREE_PAGE_SIZE", "12"),
            ("CATALOG_TREE_COLOR", "Never"),
            ("CATALOG_TREE_UNICODE", "0"),
        ]),
    );

    assert_eq!(config.pagination.page_size, 12);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(!config.output.unicode);
}

#[test]
fn test_env_overrides_ignore_invalid_values() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("CATALOG_TREE_PAGE_SIZE", "0"),
            ("CATALOG_TREE_COLOR", "purple"),
        ]),
    );

    assert_eq!(config.pagination.page_size, 5);
    assert_eq!(config.output.color, ColorMode::Auto);
}
