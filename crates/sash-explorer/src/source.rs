//! File-system access used by the card scan.

use sash_common::ExplorerError;
use std::path::Path;

/// The handful of file-system queries a card scan needs.
pub trait FileSource {
    fn dir_exists(&self, path: &Path) -> bool;

    /// Names of the entries directly inside `dir`, files and directories
    /// alike, in a stable order.
    fn list_files(&self, dir: &Path) -> Result<Vec<String>, ExplorerError>;

    fn file_exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String, ExplorerError>;
}

/// [`FileSource`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileSource;

impl FileSource for FsFileSource {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>, ExplorerError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, ExplorerError> {
        Ok(std::fs::read_to_string(path)?)
    }
}
