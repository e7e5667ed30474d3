use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ContentType;

/// A card document discovered on disk, ready to be added to the card store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardContent {
    /// File name of the card, shown in the explorer.
    pub title: String,
    /// Raw JSON body; `"{}"` when the file was empty or unreadable.
    pub card_json: String,
    pub card_output: Vec<serde_json::Value>,
    pub entities: Vec<serde_json::Value>,
    pub path: PathBuf,
    pub content_type: ContentType,
}

/// Every action the shell's explorer components can dispatch.
///
/// The app state reducer matches on this enum to route to the card store
/// and the editor host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    // -- Cards --
    CreateCard(CardContent),

    // -- Editor --
    OpenEditor {
        content_type: ContentType,
        document_id: String,
    },

    // -- Noop --
    None,
}
