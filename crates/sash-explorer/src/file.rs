//! One clickable card row.

use sash_common::{Action, ContentType, Dispatch, ExplorerError};

use crate::store::CardStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardExplorerFile {
    card_id: String,
    file_name: String,
}

impl CardExplorerFile {
    /// Look up `card_id` in `store`; the row shows the card's title.
    pub fn from_store(card_id: &str, store: &CardStore) -> Result<Self, ExplorerError> {
        let card = store
            .get(card_id)
            .ok_or_else(|| ExplorerError::UnknownCard(card_id.to_string()))?;
        Ok(Self {
            card_id: card_id.to_string(),
            file_name: card.title.clone(),
        })
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Open the card in an editor.
    pub fn click(&self, dispatch: &impl Dispatch) {
        dispatch.dispatch(Action::OpenEditor {
            content_type: ContentType::Card,
            document_id: self.card_id.clone(),
        });
    }
}
