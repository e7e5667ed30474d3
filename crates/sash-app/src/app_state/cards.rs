//! Card explorer wiring.

use std::path::{Path, PathBuf};

use sash_common::{ActionLog, ExplorerError, SashError};
use sash_explorer::{CardExplorer, CardExplorerFile, ExplorerEntry, FileSource};

use super::core::SashApp;
use super::reports::CardsReport;

impl SashApp {
    /// Scan `folder` (or `explorer.folder` from the config) for cards and
    /// list them. When `open` names a listed file, open it in an editor.
    pub fn list_cards(
        &mut self,
        folder: Option<&Path>,
        files: &impl FileSource,
        open: Option<&str>,
    ) -> Result<CardsReport, SashError> {
        let folder: PathBuf = folder
            .map(Path::to_path_buf)
            .or_else(|| self.config.explorer.folder.clone())
            .ok_or_else(|| SashError::Other("no folder given and explorer.folder is not set".into()))?;

        let explorer = CardExplorer::new(&folder);
        let actions = ActionLog::new();
        explorer.scan(files, &actions)?;
        for action in actions.take() {
            self.dispatch(action);
        }

        let entries = explorer.entries(&self.cards);
        let opened = match open {
            Some(name) => Some(self.open_card(&entries, name)?),
            None => None,
        };

        Ok(CardsReport {
            folder,
            section: explorer.title(),
            expanded: explorer.is_expanded(),
            entries,
            opened,
        })
    }

    fn open_card(&mut self, entries: &[ExplorerEntry], name: &str) -> Result<String, SashError> {
        let card_id = entries
            .iter()
            .find_map(|entry| match entry {
                ExplorerEntry::File { card_id, file_name } if file_name == name => {
                    Some(card_id.as_str())
                }
                _ => None,
            })
            .ok_or_else(|| ExplorerError::UnknownCard(name.to_string()))?;

        let file = CardExplorerFile::from_store(card_id, &self.cards)?;
        let clicks = ActionLog::new();
        file.click(&clicks);

        let mut opened = None;
        for action in clicks.take() {
            opened = self.dispatch(action).or(opened);
        }
        opened.ok_or_else(|| SashError::Other(format!("card {name} did not open")))
    }
}
