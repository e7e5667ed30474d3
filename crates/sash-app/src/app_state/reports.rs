//! Serializable results of the CLI commands.

use std::fmt;
use std::path::PathBuf;

use sash_common::{Orientation, PaneSize};
use sash_explorer::ExplorerEntry;
use sash_splitter::RenderItem;
use serde::Serialize;

fn join_sizes(sizes: &[PaneSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub orientation: Orientation,
    pub container_extent: f64,
    pub sizes: Vec<PaneSize>,
    pub items: Vec<RenderItem>,
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} splitter, {} panes over {}px",
            self.orientation,
            self.sizes.len(),
            self.container_extent
        )?;
        write!(f, "sizes: [{}]", join_sizes(&self.sizes))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DragReport {
    pub divider: usize,
    pub from: f64,
    pub to: f64,
    /// One entry per published size sequence during the gesture.
    pub frames: Vec<Vec<PaneSize>>,
    pub sizes: Vec<PaneSize>,
}

impl fmt::Display for DragReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "divider {}: {} -> {}", self.divider, self.from, self.to)?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  move {}: [{}]", i + 1, join_sizes(frame))?;
        }
        write!(f, "sizes: [{}]", join_sizes(&self.sizes))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardsReport {
    pub folder: PathBuf,
    pub section: &'static str,
    pub expanded: bool,
    pub entries: Vec<ExplorerEntry>,
    /// Card id opened with `--open`, if any.
    pub opened: Option<String>,
}

impl fmt::Display for CardsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.expanded { "v" } else { ">" };
        write!(f, "{marker} {}", self.section)?;
        for entry in &self.entries {
            match entry {
                ExplorerEntry::File { file_name, .. } => write!(f, "\n    {file_name}")?,
                ExplorerEntry::Placeholder { text } => write!(f, "\n    {text}")?,
            }
        }
        if let Some(id) = &self.opened {
            write!(f, "\nopened card {id}")?;
        }
        Ok(())
    }
}
