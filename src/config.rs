//! On-disk layout of the data directory.
//!
//! ```text
//! <root>/
//! ├── settings.yaml
//! └── decks/
//!     └── {deck-id}.yaml
//! ```

use std::path::PathBuf;

pub const DECKS_DIR: &str = "decks";
pub const SETTINGS_FILE: &str = "settings.yaml";
pub const DECK_EXTENSION: &str = "yaml";

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "FLASHDECK_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn decks_dir(&self) -> PathBuf {
        self.root.join(DECKS_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
