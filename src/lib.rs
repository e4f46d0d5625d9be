pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod mode;
pub mod models;
pub mod storage;

pub use config::DataPaths;
pub use error::{FlashdeckError, Result};
pub use models::{Card, Deck, DeckManager, Settings, SettingsField};
pub use storage::Storage;
