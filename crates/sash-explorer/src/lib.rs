//! Card explorer: discovers card files under a bot folder, keeps them in a
//! store keyed by generated id, and lists them for the shell sidebar.

pub mod explorer;
pub mod file;
pub mod source;
pub mod store;

pub use explorer::{CardExplorer, ExplorerEntry, CARDS_DIR, PLACEHOLDER_TEXT, SECTION_TITLE};
pub use file::CardExplorerFile;
pub use source::{FileSource, FsFileSource};
pub use store::CardStore;
