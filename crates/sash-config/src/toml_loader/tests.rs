//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use sash_common::{ConfigError, Orientation, PaneSize};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_sash_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[splitter]
orientation = "vertical"
panes = 2
initial_sizes = ["40%", "120px"]

[container]
width = 1024
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.splitter.orientation().unwrap(), Orientation::Vertical);
    assert_eq!(config.splitter.panes, 2);
    assert_eq!(
        config.splitter.initial_sizes,
        vec![PaneSize::Percent(40.0), PaneSize::Pixels(120.0)]
    );
    assert!((config.container.width - 1024.0).abs() < f64::EPSILON);
    // Defaults preserved
    assert!((config.container.height - 600.0).abs() < f64::EPSILON);
    assert!((config.splitter.divider_size - 4.0).abs() < f64::EPSILON);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_out_of_range_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[splitter]
orientation = "horizontal"
divider_size = 500
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.splitter.divider_size - 500.0).abs() < f64::EPSILON);
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sash").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.splitter.orientation.as_deref(), Some("horizontal"));
    assert_eq!(config.splitter.panes, 3);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::SashConfig;

    let content = default_config_toml();
    let config: SashConfig = toml::from_str(&content).unwrap();
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("sash"));
        assert!(path_str.ends_with("config.toml"));
    }
}
