//! Splitter and container configuration types.

use sash_common::{ConfigError, Orientation, PaneSize};
use serde::{Deserialize, Serialize};

/// Splitter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Stacking direction: "horizontal" (panes top to bottom) or
    /// "vertical" (panes side by side). Required in a config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    /// Divider thickness in pixels (valid range: 0-64).
    pub divider_size: f64,
    /// Number of panes (valid range: 1-32).
    pub panes: u32,
    /// Minimum pane lengths in pixels, by pane index.
    pub min_sizes: Vec<f64>,
    /// Starting pane sizes, e.g. `["25%", "75%"]`. Empty means even split.
    pub initial_sizes: Vec<PaneSize>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            orientation: Some("horizontal".into()),
            divider_size: 4.0,
            panes: 3,
            min_sizes: Vec::new(),
            initial_sizes: Vec::new(),
        }
    }
}

impl SplitterConfig {
    /// Defaults for a `[splitter]` table read from a file: everything but
    /// the orientation, which the file must state.
    pub fn unset() -> Self {
        Self {
            orientation: None,
            ..Self::default()
        }
    }

    pub fn orientation(&self) -> Result<Orientation, ConfigError> {
        let value = self.orientation.as_deref().ok_or_else(|| {
            ConfigError::ValidationError("splitter.orientation is required".into())
        })?;
        value
            .parse()
            .map_err(|e: String| ConfigError::ValidationError(format!("splitter.orientation: {e}")))
    }

    pub fn initial_sizes(&self) -> Option<&[PaneSize]> {
        if self.initial_sizes.is_empty() {
            None
        } else {
            Some(&self.initial_sizes)
        }
    }
}

/// Container geometry used by the headless host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Width in pixels (valid range: 1-16384).
    pub width: f64,
    /// Height in pixels (valid range: 1-16384).
    pub height: f64,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
