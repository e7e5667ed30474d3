//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use sash_common::PaneSize;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    let config = SashConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_unknown_orientation() {
    let mut config = SashConfig::default();
    config.splitter.orientation = Some("sideways".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.orientation"));
}

#[test]
fn catches_divider_size_too_large() {
    let mut config = SashConfig::default();
    config.splitter.divider_size = 100.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.divider_size"));
}

#[test]
fn catches_nan_divider_size() {
    let mut config = SashConfig::default();
    config.splitter.divider_size = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_zero_panes() {
    let mut config = SashConfig::default();
    config.splitter.panes = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.panes"));
}

#[test]
fn catches_negative_min_size() {
    let mut config = SashConfig::default();
    config.splitter.min_sizes = vec![10.0, -1.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.min_sizes[1]"));
}

#[test]
fn catches_initial_sizes_count_mismatch() {
    let mut config = SashConfig::default();
    config.splitter.initial_sizes = vec![PaneSize::Percent(50.0), PaneSize::Percent(50.0)];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.initial_sizes"));
}

#[test]
fn matching_initial_sizes_validate() {
    let mut config = SashConfig::default();
    config.splitter.panes = 2;
    config.splitter.initial_sizes = vec![PaneSize::Percent(25.0), PaneSize::Pixels(300.0)];
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_percent_sizes_that_do_not_fill() {
    let mut config = SashConfig::default();
    config.splitter.panes = 2;
    config.splitter.initial_sizes = vec![PaneSize::Percent(10.0), PaneSize::Percent(10.0)];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.initial_sizes add up to 20%"));
}

#[test]
fn percent_sizes_must_leave_room_for_dividers() {
    let mut config = SashConfig::default();
    config.splitter.panes = 2;
    config.splitter.initial_sizes = vec![PaneSize::Percent(50.0), PaneSize::Percent(50.0)];
    assert!(validate(&config).is_err());

    // 600px tall, one 6px divider: panes share 99%.
    config.splitter.divider_size = 6.0;
    config.splitter.initial_sizes = vec![PaneSize::Percent(49.5), PaneSize::Percent(49.5)];
    assert!(validate(&config).is_ok());

    config.splitter.divider_size = 0.0;
    config.splitter.initial_sizes = vec![PaneSize::Percent(50.0), PaneSize::Percent(50.0)];
    assert!(validate(&config).is_ok());
}

#[test]
fn vertical_percent_fill_uses_container_width() {
    let mut config = SashConfig::default();
    config.splitter.orientation = Some("vertical".into());
    config.splitter.panes = 2;
    config.splitter.divider_size = 8.0;
    // 800px wide, one 8px divider: panes share 99%.
    config.splitter.initial_sizes = vec![PaneSize::Percent(33.0), PaneSize::Percent(66.0)];
    assert!(validate(&config).is_ok());
}

#[test]
fn missing_orientation_fails_validation() {
    let config: SashConfig = toml::from_str("[splitter]\npanes = 2\n").unwrap();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.orientation is required"));

    let config: SashConfig = toml::from_str("").unwrap();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.orientation is required"));
}

#[test]
fn catches_degenerate_container() {
    let mut config = SashConfig::default();
    config.container.width = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("container.width"));
}

#[test]
fn catches_empty_explorer_folder() {
    let mut config = SashConfig::default();
    config.explorer.folder = Some(PathBuf::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("explorer.folder"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SashConfig::default();
    config.splitter.panes = 0;
    config.container.height = -5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splitter.panes"));
    assert!(err.contains("container.height"));
    assert!(err.contains("; "));
}
