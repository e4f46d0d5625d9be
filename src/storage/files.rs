//! File storage for decks and settings
//!
//! Each deck lives in its own `{deck-id}.yaml` file under the decks directory.
//! Settings live in a single YAML file next to it. Every save overwrites the
//! whole file.

use crate::config::{DECK_EXTENSION, DataPaths};
use crate::error::{FlashdeckError, Result};
use crate::models::{Deck, Settings};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Storage manager for the deck and settings files
#[derive(Debug, Clone)]
pub struct Storage {
    paths: DataPaths,
}

impl Storage {
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Get the file path for a deck
    pub fn deck_path(&self, id: Uuid) -> PathBuf {
        self.paths
            .decks_dir()
            .join(format!("{id}.{DECK_EXTENSION}"))
    }

    /// Creates the decks directory if it does not exist yet
    pub fn ensure_directories(&self) -> Result<()> {
        let dir = self.paths.decks_dir();
        fs::create_dir_all(&dir).map_err(|e| FlashdeckError::io("create directory", dir, e))
    }

    // ==================== Deck Operations ====================

    /// Writes the full deck state, replacing any previous content
    pub fn save_deck(&self, deck: &Deck) -> Result<()> {
        let yaml = serde_yaml::to_string(deck).map_err(|source| FlashdeckError::Serialize {
            what: "deck",
            source,
        })?;

        let path = self.deck_path(deck.id);
        if !path.exists() {
            // Start from an empty regular file before writing the content
            File::create(&path).map_err(|e| FlashdeckError::io("create", &path, e))?;
        }
        fs::write(&path, yaml).map_err(|e| FlashdeckError::io("write", &path, e))?;

        debug!(deck = %deck.id, cards = deck.cards.len(), "saved deck");
        Ok(())
    }

    /// Reads a single deck by id
    pub fn load_deck(&self, id: Uuid) -> Result<Deck> {
        let path = self.deck_path(id);
        if !path.exists() {
            return Err(FlashdeckError::DeckFileNotFound { path });
        }
        read_deck(&path)
    }

    /// Reads every deck file in the decks directory, keyed by the id stored
    /// inside each file.
    ///
    /// One unreadable or malformed file fails the whole load.
    pub fn load_all_decks(&self) -> Result<HashMap<Uuid, Deck>> {
        let dir = self.paths.decks_dir();
        let entries = fs::read_dir(&dir).map_err(|e| FlashdeckError::io("list", &dir, e))?;

        let mut decks = HashMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| FlashdeckError::io("list", &dir, e))?;
            let path = entry.path();
            if !is_deck_file(&path) {
                continue;
            }

            let deck = read_deck(&path)?;
            decks.insert(deck.id, deck);
        }

        debug!(count = decks.len(), dir = %dir.display(), "loaded decks");
        Ok(decks)
    }

    /// Removes a deck's file
    pub fn delete_deck_from_storage(&self, id: Uuid) -> Result<()> {
        let path = self.deck_path(id);
        if !path.exists() {
            return Err(FlashdeckError::DeckFileNotFound { path });
        }

        fs::remove_file(&path).map_err(|e| FlashdeckError::io("delete", &path, e))?;
        debug!(deck = %id, "deleted deck file");
        Ok(())
    }

    // ==================== Settings Operations ====================

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let yaml = serde_yaml::to_string(settings).map_err(|source| FlashdeckError::Serialize {
            what: "settings",
            source,
        })?;

        let path = self.paths.settings_file();
        fs::write(&path, yaml).map_err(|e| FlashdeckError::io("write", &path, e))
    }

    /// Reads settings, falling back to defaults when the file is absent
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.paths.settings_file();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            Err(e) => return Err(FlashdeckError::io("read", &path, e)),
        };

        serde_yaml::from_str(&content).map_err(|source| FlashdeckError::Deserialize { path, source })
    }
}

fn is_deck_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml")
}

fn read_deck(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path).map_err(|e| FlashdeckError::io("read", path, e))?;
    serde_yaml::from_str(&content).map_err(|source| FlashdeckError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
