pub mod card;
pub mod deck;
pub mod deck_manager;
pub mod settings;

pub use card::{Card, parse_tags};
pub use deck::Deck;
pub use deck_manager::{DeckManager, sort_decks_alphabetical};
pub use settings::{Settings, SettingsField};
