use std::path::PathBuf;

use crate::types::ElementRef;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of the initial proportional layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("a splitter needs at least one pane")]
    NoPanes,

    #[error("container extent must be a positive finite length, got {0}")]
    DegenerateContainer(f64),

    #[error("divider extent must be a non-negative finite length, got {0}")]
    InvalidDividerExtent(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum SplitterError {
    #[error("invalid splitter configuration: {0}")]
    InvalidConfig(String),

    #[error("geometry unavailable for {0}")]
    MissingGeometry(ElementRef),

    #[error("no divider at index {0}")]
    UnknownDivider(usize),

    #[error("splitter is already attached to an event scope")]
    AlreadyAttached,

    #[error("splitter is not attached to an event scope")]
    NotAttached,

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SashError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Splitter(#[from] SplitterError),

    #[error(transparent)]
    Explorer(#[from] ExplorerError),

    #[error("{0}")]
    Other(String),
}

impl From<LayoutError> for SashError {
    fn from(err: LayoutError) -> Self {
        SashError::Splitter(SplitterError::Layout(err))
    }
}
