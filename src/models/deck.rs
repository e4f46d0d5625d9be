//! Deck is an ordered set of cards with a cursor on the card being studied.
//!
//! The cursor is a raw index into `cards`. Removing a card before the cursor
//! does not move it, so the cursor then points at the following card.
use super::Card;
use crate::error::Result;
use crate::storage::Storage;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "deserialize_cursor")]
    pub current_id: usize,
}

// Negative cursors in a file load as 0.
fn deserialize_cursor<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or(0))
}

impl Deck {
    /// Creates an empty deck with a fresh random id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            cards: Vec::new(),
            current_id: 0,
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at `index`; out-of-range indices are ignored.
    pub fn remove_card(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }

        self.cards.remove(index);

        if self.cards.is_empty() {
            self.current_id = 0;
        } else if self.current_id >= self.cards.len() {
            self.current_id = self.cards.len() - 1;
        }
    }

    /// Advances the cursor (wrapping to the first card) and saves the deck.
    ///
    /// The cursor only moves if the save succeeds.
    pub fn next_card(&mut self, storage: &Storage) -> Result<()> {
        if self.cards.is_empty() {
            return Ok(());
        }
        let next = (self.cursor() + 1) % self.cards.len();
        self.move_cursor(next, storage)
    }

    /// Moves the cursor back (wrapping to the last card) and saves the deck.
    pub fn prev_card(&mut self, storage: &Storage) -> Result<()> {
        if self.cards.is_empty() {
            return Ok(());
        }
        let len = self.cards.len();
        let prev = (self.cursor() + len - 1) % len;
        self.move_cursor(prev, storage)
    }

    /// Card under the cursor, or `None` for an empty deck.
    ///
    /// An out-of-range cursor is reset to 0 first.
    pub fn current_card(&mut self) -> Option<&Card> {
        if self.current_id >= self.cards.len() {
            self.current_id = 0;
        }
        self.cards.get(self.current_id)
    }

    // Cursor with the out-of-range reset applied, without mutating.
    fn cursor(&self) -> usize {
        if self.current_id < self.cards.len() {
            self.current_id
        } else {
            0
        }
    }

    fn move_cursor(&mut self, target: usize, storage: &Storage) -> Result<()> {
        let previous = self.current_id;
        self.current_id = target;
        if let Err(err) = storage.save_deck(self) {
            warn!(deck = %self.id, error = %err, "cursor move not saved, restoring cursor");
            self.current_id = previous;
            return Err(err);
        }
        Ok(())
    }
}
