//! JSON import/export module for decks.
//! Provides functionality to save and load a single Deck to/from a JSON file.

use crate::error::{FlashdeckError, Result};
use crate::models::Deck;
use chrono::{DateTime, Local};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Exports a deck to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(deck: &Deck, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(deck)?;
    let mut file = File::create(path).map_err(|e| FlashdeckError::io("create", path, e))?;
    file.write_all(json_string.as_bytes())
        .map_err(|e| FlashdeckError::io("write", path, e))?;

    info!(deck = %deck.id, path = %path.display(), "exported deck");
    Ok(())
}

/// Imports a deck from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: &Path) -> Result<Deck> {
    let mut file = File::open(path).map_err(|e| FlashdeckError::io("open", path, e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| FlashdeckError::io("read", path, e))?;

    let deck: Deck = serde_json::from_str(&contents)?;

    info!(name = %deck.name, path = %path.display(), "imported deck");
    Ok(deck)
}

/// Default export file name, e.g. `Spanish-2024-05-01.json`.
pub fn default_export_file_name(deck: &Deck, date: DateTime<Local>) -> String {
    let name: String = deck
        .name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}-{}.json", name, date.format("%Y-%m-%d"))
}
