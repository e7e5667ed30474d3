//! sash configuration system.
//!
//! Provides TOML-based configuration for the splitter, the headless
//! container, and the card explorer, with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sash_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{
    ContainerConfig, ExplorerConfig, LogLevel, LoggingConfig, SashConfig, SplitterConfig,
    CONFIG_SCHEMA_VERSION,
};
pub use toml_loader::{load_default, load_from_path};

use sash_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<SashConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from `path`, or from the platform default when
/// `path` is `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<SashConfig, ConfigError> {
    match path {
        Some(path) => {
            let config = toml_loader::load_from_path(path)?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SashConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = SashConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"splitter\""));
        assert!(json.contains("\"container\""));
        assert!(json.contains("\"explorer\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_renders_sizes_as_strings() {
        let mut config = SashConfig::default();
        config.splitter.panes = 2;
        config.splitter.initial_sizes = vec![
            sash_common::PaneSize::Percent(30.0),
            sash_common::PaneSize::Pixels(200.0),
        ];
        let json = config_to_json(&config);
        assert!(json.contains("\"30%\""));
        assert!(json.contains("\"200px\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SashConfig::default();
        let json = config_to_json(&config);
        let parsed: SashConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.splitter.orientation.as_deref(), Some("horizontal"));
        assert_eq!(parsed.splitter.panes, 3);
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn load_config_from_path_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splitter]\norientation = \"vertical\"\npanes = 0\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_path_requires_orientation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splitter]\npanes = 2\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("splitter.orientation is required"));
    }

    #[test]
    fn load_config_from_path_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[splitter]\norientation = \"vertical\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.splitter.orientation.as_deref(), Some("vertical"));
    }
}
