//! Error types for deck storage and deck management.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by storage and the deck manager.
#[derive(Debug, Error)]
pub enum FlashdeckError {
    // === Not found ===
    /// No deck with this id is registered.
    #[error("deck not found with ID: {0}")]
    DeckNotFound(Uuid),

    /// The backing file for a deck does not exist.
    #[error("deck file not found: {}", path.display())]
    DeckFileNotFound { path: PathBuf },

    // === Serialization ===
    /// In-memory value could not be encoded as YAML.
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    /// File content could not be decoded into the expected shape.
    #[error("failed to parse YAML in {}: {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON export or import failed to encode/decode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Filesystem ===
    /// Create/read/write/delete/list call failed.
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlashdeckError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DeckNotFound(_) | Self::DeckFileNotFound { .. })
    }

    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            Self::Serialize { .. } | Self::Deserialize { .. } | Self::Json(_)
        )
    }

    pub fn is_filesystem(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, FlashdeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FlashdeckError::DeckFileNotFound {
            path: PathBuf::from("decks/abc.yaml"),
        };
        assert_eq!(err.to_string(), "deck file not found: decks/abc.yaml");
    }

    #[test]
    fn test_every_variant_has_one_category() {
        let errors = [
            FlashdeckError::DeckNotFound(Uuid::nil()),
            FlashdeckError::io(
                "write",
                "x.yaml",
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ),
            FlashdeckError::Json(serde_json::from_str::<u8>("nope").unwrap_err()),
        ];

        for err in &errors {
            let hits = [err.is_not_found(), err.is_serialization(), err.is_filesystem()]
                .iter()
                .filter(|hit| **hit)
                .count();
            assert_eq!(hits, 1, "{err}");
        }
    }
}
