//! Pane extents as the rendering host consumes them.
//!
//! A size is either a percentage of the container's extent along the split
//! axis or an absolute length. The string form (`"32.5%"`, `"200px"`) is
//! what gets serialized and handed to the host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaneSize {
    Percent(f64),
    Pixels(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pane size '{0}' (expected e.g. \"25%\", \"200px\" or \"200\")")]
pub struct ParsePaneSizeError(pub String);

impl PaneSize {
    /// Length of this size inside a container of `container_extent`.
    pub fn to_length(&self, container_extent: f64) -> f64 {
        match *self {
            PaneSize::Percent(p) => p / 100.0 * container_extent,
            PaneSize::Pixels(px) => px,
        }
    }

    /// Percentage of `container_extent` this size occupies. Returns `None`
    /// for a pixel size when the container has no extent.
    pub fn to_percent(&self, container_extent: f64) -> Option<f64> {
        match *self {
            PaneSize::Percent(p) => Some(p),
            PaneSize::Pixels(_) if container_extent <= 0.0 => None,
            PaneSize::Pixels(px) => Some(px / container_extent * 100.0),
        }
    }

    pub fn is_valid(&self) -> bool {
        let v = match *self {
            PaneSize::Percent(v) | PaneSize::Pixels(v) => v,
        };
        v.is_finite() && v >= 0.0
    }
}

impl fmt::Display for PaneSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneSize::Percent(p) => write!(f, "{p}%"),
            PaneSize::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

impl FromStr for PaneSize {
    type Err = ParsePaneSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParsePaneSizeError(s.to_string());

        let size = if let Some(num) = trimmed.strip_suffix('%') {
            PaneSize::Percent(num.trim().parse().map_err(|_| err())?)
        } else if let Some(num) = trimmed.strip_suffix("px") {
            PaneSize::Pixels(num.trim().parse().map_err(|_| err())?)
        } else {
            PaneSize::Pixels(trimmed.parse().map_err(|_| err())?)
        };

        if size.is_valid() {
            Ok(size)
        } else {
            Err(err())
        }
    }
}

impl TryFrom<String> for PaneSize {
    type Error = ParsePaneSizeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaneSize> for String {
    fn from(size: PaneSize) -> Self {
        size.to_string()
    }
}
