//! Registry of all decks, and the only place decks are mutated from.
//!
//! Every mutation is written to storage before it becomes visible in memory,
//! so a failed save leaves the registry exactly as it was on disk.
use super::{Card, Deck};
use crate::error::{FlashdeckError, Result};
use crate::storage::Storage;
use std::collections::HashMap;
use tracing::{info, warn};
use uuid::Uuid;

pub struct DeckManager {
    decks: HashMap<Uuid, Deck>,
    storage: Storage,
}

impl DeckManager {
    pub fn new(storage: Storage) -> Self {
        Self {
            decks: HashMap::new(),
            storage,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Replaces the registry with everything in storage.
    ///
    /// On error the current registry is kept as is.
    pub fn load_all_decks(&mut self) -> Result<()> {
        let decks = self.storage.load_all_decks()?;
        info!(count = decks.len(), "loaded decks");
        self.decks = decks;
        Ok(())
    }

    pub fn get_deck_by_id(&self, id: Uuid) -> Option<&Deck> {
        self.decks.get(&id)
    }

    /// Unordered; use [`sort_decks_alphabetical`] for display.
    pub fn get_all_decks(&self) -> Vec<&Deck> {
        self.decks.values().collect()
    }

    pub fn get_num_decks(&self) -> usize {
        self.decks.len()
    }

    /// Saves the deck and registers it, assigning an id if it has none.
    pub fn add_deck(&mut self, mut deck: Deck) -> Result<Uuid> {
        if deck.id.is_nil() {
            deck.id = Uuid::new_v4();
        }

        self.storage.save_deck(&deck)?;

        let id = deck.id;
        info!(deck = %id, name = %deck.name, "created deck");
        self.decks.insert(id, deck);
        Ok(id)
    }

    /// Registers a deck from outside (e.g. a JSON import). A nil id or one
    /// that is already registered is replaced with a fresh id.
    pub fn import_deck(&mut self, mut deck: Deck) -> Result<Uuid> {
        if deck.id.is_nil() || self.decks.contains_key(&deck.id) {
            deck.id = Uuid::new_v4();
        }
        self.add_deck(deck)
    }

    /// Deletes the deck's file, then drops it from the registry.
    pub fn remove_deck(&mut self, id: Uuid) -> Result<()> {
        if !self.decks.contains_key(&id) {
            return Err(FlashdeckError::DeckNotFound(id));
        }

        self.storage.delete_deck_from_storage(id)?;

        if let Some(deck) = self.decks.remove(&id) {
            info!(deck = %id, name = %deck.name, "deleted deck");
        }
        Ok(())
    }

    pub fn add_card_to_deck(&mut self, deck_id: Uuid, card: Card) -> Result<()> {
        self.update_deck(deck_id, |deck| deck.add_card(card))
    }

    /// Out-of-range indices leave the cards untouched but still re-save the deck.
    pub fn remove_card_from_deck(&mut self, deck_id: Uuid, index: usize) -> Result<()> {
        self.update_deck(deck_id, |deck| deck.remove_card(index))
    }

    /// Writes the deck's current in-memory state to storage.
    pub fn save_deck_state(&self, deck_id: Uuid) -> Result<()> {
        let deck = self
            .decks
            .get(&deck_id)
            .ok_or(FlashdeckError::DeckNotFound(deck_id))?;
        self.storage.save_deck(deck)
    }

    pub fn next_card(&mut self, deck_id: Uuid) -> Result<()> {
        let deck = self
            .decks
            .get_mut(&deck_id)
            .ok_or(FlashdeckError::DeckNotFound(deck_id))?;
        deck.next_card(&self.storage)
    }

    pub fn prev_card(&mut self, deck_id: Uuid) -> Result<()> {
        let deck = self
            .decks
            .get_mut(&deck_id)
            .ok_or(FlashdeckError::DeckNotFound(deck_id))?;
        deck.prev_card(&self.storage)
    }

    /// Card under the deck's cursor. `Ok(None)` for an empty deck.
    pub fn current_card(&mut self, deck_id: Uuid) -> Result<Option<&Card>> {
        let deck = self
            .decks
            .get_mut(&deck_id)
            .ok_or(FlashdeckError::DeckNotFound(deck_id))?;
        Ok(deck.current_card())
    }

    // Applies `mutate` to a copy, saves the copy, and only then swaps it in.
    fn update_deck(&mut self, deck_id: Uuid, mutate: impl FnOnce(&mut Deck)) -> Result<()> {
        let deck = self
            .decks
            .get_mut(&deck_id)
            .ok_or(FlashdeckError::DeckNotFound(deck_id))?;

        let mut staged = deck.clone();
        mutate(&mut staged);

        if let Err(err) = self.storage.save_deck(&staged) {
            warn!(deck = %deck_id, error = %err, "deck change not saved, keeping previous state");
            return Err(err);
        }

        *deck = staged;
        Ok(())
    }
}

/// Orders decks by name, ignoring case.
pub fn sort_decks_alphabetical(decks: &mut [&Deck]) {
    decks.sort_by_cached_key(|deck| deck.name.to_lowercase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataPaths;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_manager() -> (TempDir, DeckManager) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(DataPaths::new(dir.path()));
        storage.ensure_directories().unwrap();
        (dir, DeckManager::new(storage))
    }

    fn break_storage(dir: &TempDir) {
        fs::remove_dir_all(dir.path().join("decks")).unwrap();
    }

    #[test]
    fn test_add_deck_persists_and_registers() {
        let (_dir, mut manager) = create_test_manager();

        let id = manager.add_deck(Deck::new("Spanish")).unwrap();

        assert_eq!(manager.get_num_decks(), 1);
        assert_eq!(manager.get_deck_by_id(id).unwrap().name, "Spanish");
        assert!(manager.storage().deck_path(id).is_file());
    }

    #[test]
    fn test_add_deck_assigns_missing_id() {
        let (_dir, mut manager) = create_test_manager();
        let mut deck = Deck::new("No id");
        deck.id = Uuid::nil();

        let id = manager.add_deck(deck).unwrap();

        assert!(!id.is_nil());
        assert_eq!(manager.get_deck_by_id(id).unwrap().id, id);
    }

    #[test]
    fn test_add_deck_fails_without_registering() {
        let (dir, mut manager) = create_test_manager();
        break_storage(&dir);

        assert!(manager.add_deck(Deck::new("Lost")).is_err());
        assert_eq!(manager.get_num_decks(), 0);
    }

    #[test]
    fn test_import_deck_replaces_taken_id() {
        let (_dir, mut manager) = create_test_manager();
        let deck = Deck::new("Spanish");
        let copy = deck.clone();
        let first = manager.add_deck(deck).unwrap();

        let second = manager.import_deck(copy).unwrap();

        assert_ne!(first, second);
        assert_eq!(manager.get_num_decks(), 2);
    }

    #[test]
    fn test_remove_deck() {
        let (_dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();

        manager.remove_deck(id).unwrap();

        assert!(manager.get_deck_by_id(id).is_none());
        assert!(!manager.storage().deck_path(id).exists());
    }

    #[test]
    fn test_remove_deck_keeps_entry_when_file_missing() {
        let (_dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();
        fs::remove_file(manager.storage().deck_path(id)).unwrap();

        let err = manager.remove_deck(id).unwrap_err();

        assert!(err.is_not_found());
        assert!(manager.get_deck_by_id(id).is_some());
    }

    #[test]
    fn test_card_operations_on_unknown_deck() {
        let (_dir, mut manager) = create_test_manager();
        let id = Uuid::new_v4();

        assert!(manager.add_card_to_deck(id, Card::new("q", "a", vec![])).unwrap_err().is_not_found());
        assert!(manager.remove_card_from_deck(id, 0).unwrap_err().is_not_found());
        assert!(manager.save_deck_state(id).unwrap_err().is_not_found());
        assert!(manager.next_card(id).unwrap_err().is_not_found());
        assert!(manager.prev_card(id).unwrap_err().is_not_found());
        assert!(manager.current_card(id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_add_card_persists() {
        let (_dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();

        manager.add_card_to_deck(id, Card::new("hola", "hello", vec![])).unwrap();

        let on_disk = manager.storage().load_deck(id).unwrap();
        assert_eq!(on_disk.cards.len(), 1);
        assert_eq!(&on_disk, manager.get_deck_by_id(id).unwrap());
    }

    #[test]
    fn test_failed_add_card_leaves_memory_unchanged() {
        let (dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();
        break_storage(&dir);

        let err = manager.add_card_to_deck(id, Card::new("hola", "hello", vec![])).unwrap_err();

        assert!(err.is_filesystem());
        assert!(manager.get_deck_by_id(id).unwrap().cards.is_empty());
    }

    #[test]
    fn test_failed_remove_card_leaves_memory_unchanged() {
        let (dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();
        manager.add_card_to_deck(id, Card::new("hola", "hello", vec![])).unwrap();
        break_storage(&dir);

        assert!(manager.remove_card_from_deck(id, 0).is_err());
        assert_eq!(manager.get_deck_by_id(id).unwrap().cards.len(), 1);
    }

    #[test]
    fn test_load_all_decks_replaces_registry() {
        let (_dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();

        let storage = manager.storage().clone();
        let mut fresh = DeckManager::new(storage);
        fresh.add_deck(Deck::new("French")).unwrap();

        manager.load_all_decks().unwrap();

        assert_eq!(manager.get_num_decks(), 2);
        assert!(manager.get_deck_by_id(id).is_some());
    }

    #[test]
    fn test_load_all_decks_drops_stale_entries() {
        let (_dir, mut manager) = create_test_manager();
        let stale = manager.add_deck(Deck::new("Spanish")).unwrap();
        let kept = manager.add_deck(Deck::new("French")).unwrap();
        fs::remove_file(manager.storage().deck_path(stale)).unwrap();

        manager.load_all_decks().unwrap();

        assert!(manager.get_deck_by_id(stale).is_none());
        assert!(manager.get_deck_by_id(kept).is_some());
        assert_eq!(manager.get_num_decks(), 1);
    }

    #[test]
    fn test_failed_load_keeps_registry() {
        let (dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();
        fs::write(dir.path().join("decks/broken.yaml"), "id: [").unwrap();

        assert!(manager.load_all_decks().is_err());
        assert_eq!(manager.get_num_decks(), 1);
        assert!(manager.get_deck_by_id(id).is_some());
    }

    #[test]
    fn test_save_deck_state_writes_memory() {
        let (_dir, mut manager) = create_test_manager();
        let id = manager.add_deck(Deck::new("Spanish")).unwrap();
        manager.add_card_to_deck(id, Card::new("a", "1", vec![])).unwrap();
        manager.add_card_to_deck(id, Card::new("b", "2", vec![])).unwrap();

        manager.next_card(id).unwrap();
        manager.save_deck_state(id).unwrap();

        assert_eq!(manager.storage().load_deck(id).unwrap().current_id, 1);
    }

    #[test]
    fn test_sort_decks_alphabetical() {
        let decks = [Deck::new("spanish"), Deck::new("French"), Deck::new("arabic")];
        let mut refs: Vec<&Deck> = decks.iter().collect();

        sort_decks_alphabetical(&mut refs);

        let names: Vec<_> = refs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["arabic", "French", "spanish"]);
    }
}
