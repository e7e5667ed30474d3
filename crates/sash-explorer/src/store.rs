//! Card store: the reducer state behind the explorer.

use std::collections::HashMap;

use sash_common::{new_id, Action, CardContent};
use tracing::debug;

/// Cards keyed by generated id.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: HashMap<String, CardContent>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action. `CreateCard` stores the card under a fresh id and
    /// returns it; every other action leaves the store untouched.
    pub fn apply(&mut self, action: &Action) -> Option<String> {
        match action {
            Action::CreateCard(content) => {
                let id = new_id();
                debug!(card_id = %id, title = %content.title, "card created");
                self.cards.insert(id.clone(), content.clone());
                Some(id)
            }
            _ => None,
        }
    }

    /// Apply a batch in order, returning the ids of the created cards.
    pub fn apply_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<String> {
        actions
            .into_iter()
            .filter_map(|action| self.apply(&action))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&CardContent> {
        self.cards.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardContent)> {
        self.cards.iter().map(|(id, card)| (id.as_str(), card))
    }
}
