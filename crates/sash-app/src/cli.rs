use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// sash: a headless multi-pane splitter host and card explorer.
#[derive(Parser, Debug)]
#[command(name = "sash", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `debug`, `sash_splitter=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mount the configured splitter and print its pane sizes.
    Layout {
        /// Resize the container to this width after mounting.
        #[arg(long)]
        width: Option<f64>,
        /// Resize the container to this height after mounting.
        #[arg(long)]
        height: Option<f64>,
    },
    /// Drag a divider to a coordinate along the split axis.
    Drag {
        /// Divider index (0 sits between panes 0 and 1).
        #[arg(long)]
        divider: usize,
        /// Target pointer coordinate along the split axis.
        #[arg(long, allow_hyphen_values = true)]
        to: f64,
        /// Number of pointer moves between grab and release.
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Scan a bot folder for cards and list them.
    Cards {
        /// Bot folder; defaults to `explorer.folder` from the config.
        folder: Option<PathBuf>,
        /// Open the card with this file name in an editor.
        #[arg(long)]
        open: Option<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
