//! The "Cards" sidebar section.
//!
//! [`CardExplorer::scan`] looks for `<folder>/cards` and dispatches one
//! `CreateCard` per `.json` file found there. [`CardExplorer::entries`]
//! lists whatever the store holds.

use std::path::{Path, PathBuf};

use sash_common::{Action, CardContent, ContentType, Dispatch, ExplorerError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::source::FileSource;
use crate::store::CardStore;

/// Sub-directory of a bot folder that holds card files.
pub const CARDS_DIR: &str = "cards";
pub const SECTION_TITLE: &str = "Cards";
pub const PLACEHOLDER_TEXT: &str = "No cards found...";

const EMPTY_CARD_JSON: &str = "{}";

/// One row under the "Cards" heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExplorerEntry {
    File { card_id: String, file_name: String },
    Placeholder { text: String },
}

/// Explorer section for one bot folder.
#[derive(Debug, Clone)]
pub struct CardExplorer {
    folder: PathBuf,
    expanded: bool,
}

impl CardExplorer {
    /// The section starts expanded.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            expanded: true,
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn cards_dir(&self) -> PathBuf {
        self.folder.join(CARDS_DIR)
    }

    pub fn title(&self) -> &'static str {
        SECTION_TITLE
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Dispatch `CreateCard` for every `.json` file in the cards directory.
    /// A missing directory is not an error. Returns the number dispatched.
    pub fn scan(
        &self,
        files: &impl FileSource,
        dispatch: &impl Dispatch,
    ) -> Result<usize, ExplorerError> {
        let cards_dir = self.cards_dir();
        if !files.dir_exists(&cards_dir) {
            debug!(dir = %cards_dir.display(), "no cards directory");
            return Ok(0);
        }

        let mut count = 0;
        for name in files.list_files(&cards_dir)? {
            let path = cards_dir.join(&name);
            if !files.file_exists(&path) || !is_json_file(&name) {
                continue;
            }

            let card_json = match files.read_to_string(&path) {
                Ok(body) if !body.is_empty() => body,
                Ok(_) => EMPTY_CARD_JSON.to_string(),
                Err(e) => {
                    debug!(path = %path.display(), "unreadable card, using empty body: {e}");
                    EMPTY_CARD_JSON.to_string()
                }
            };

            dispatch.dispatch(Action::CreateCard(CardContent {
                title: name,
                card_json,
                card_output: Vec::new(),
                entities: Vec::new(),
                path,
                content_type: ContentType::Card,
            }));
            count += 1;
        }

        info!(folder = %self.folder.display(), cards = count, "card scan complete");
        Ok(count)
    }

    /// Rows to show under the heading: one per stored card, ordered by
    /// title then id, or a single placeholder when the store is empty.
    pub fn entries(&self, store: &CardStore) -> Vec<ExplorerEntry> {
        if store.is_empty() {
            return vec![ExplorerEntry::Placeholder {
                text: PLACEHOLDER_TEXT.to_string(),
            }];
        }

        let mut cards: Vec<(&str, &CardContent)> = store.iter().collect();
        cards.sort_by(|(a_id, a), (b_id, b)| a.title.cmp(&b.title).then_with(|| a_id.cmp(b_id)));
        cards
            .into_iter()
            .map(|(id, card)| ExplorerEntry::File {
                card_id: id.to_string(),
                file_name: card.title.clone(),
            })
            .collect()
    }
}

fn is_json_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == "json")
}
