//! Configuration schema types for sash.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod splitter;
mod system;

pub use splitter::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SashConfig {
    /// A file must name the orientation, so a missing table parses with
    /// the orientation unset.
    #[serde(default = "SplitterConfig::unset")]
    pub splitter: SplitterConfig,
    pub container: ContainerConfig,
    pub explorer: ExplorerConfig,
    pub logging: LoggingConfig,
}
