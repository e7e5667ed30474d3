//! Action dispatch: routes explorer actions to the card store and editor.

use sash_common::{Action, Event};

use super::core::SashApp;

impl SashApp {
    /// Apply one [`Action`]. Returns the id of a newly created card, or of
    /// the card an editor was opened for.
    pub(super) fn dispatch(&mut self, action: Action) -> Option<String> {
        tracing::debug!(action = action.label(), "dispatch");
        match action {
            Action::CreateCard(_) => {
                let id = self.cards.apply(&action)?;
                self.event_bus.publish(Event::CardCreated(id.clone()));
                Some(id)
            }
            Action::OpenEditor {
                content_type,
                document_id,
            } => {
                tracing::info!(?content_type, document_id = %document_id, "open editor");
                Some(document_id)
            }
            Action::None => None,
        }
    }
}
