//! Command handlers and the interactive study loop.

use crate::cli::{AddCardArgs, Command};
use anyhow::{Context, Result, anyhow};
use chrono::Local;
use flashdeck::export::json::{default_export_file_name, export_json_to_path, import_json};
use flashdeck::mode::{Intent, Mode};
use flashdeck::models::{Card, Deck, DeckManager, SettingsField, parse_tags, sort_decks_alphabetical};
use std::io::{BufRead, Write};
use tracing::error;
use uuid::Uuid;

pub struct App {
    manager: DeckManager,
}

impl App {
    pub fn new(manager: DeckManager) -> Self {
        Self { manager }
    }

    pub fn run(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Decks => self.list_decks(out),
            Command::CreateDeck { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(anyhow!("deck name must not be empty"));
                }
                let id = self.manager.add_deck(Deck::new(name))?;
                writeln!(out, "Deck '{name}' created: {id}")?;
                Ok(())
            }
            Command::DeleteDeck { id } => {
                self.manager.remove_deck(id)?;
                writeln!(out, "Deck {id} deleted")?;
                Ok(())
            }
            Command::AddCard(args) => self.add_card(args, out),
            Command::RemoveCard { id, index } => {
                let len = self.deck(id)?.cards.len();
                if index >= len {
                    return Err(anyhow!("card index {index} out of range (deck has {len} cards)"));
                }
                self.manager.remove_card_from_deck(id, index)?;
                writeln!(out, "Card {index} removed")?;
                Ok(())
            }
            Command::Show { id, answer } => self.show_current(id, answer, out),
            Command::Next { id } => {
                self.manager.next_card(id)?;
                self.show_current(id, false, out)
            }
            Command::Prev { id } => {
                self.manager.prev_card(id)?;
                self.show_current(id, false, out)
            }
            Command::Settings { toggle } => self.settings(toggle.map(Into::into), out),
            Command::Export { id, path } => {
                let deck = self.deck(id)?;
                let path = path.unwrap_or_else(|| default_export_file_name(deck, Local::now()).into());
                export_json_to_path(deck, &path)?;
                writeln!(out, "Deck '{}' exported to {}", deck.name, path.display())?;
                Ok(())
            }
            Command::Import { path } => {
                let deck = import_json(&path)
                    .with_context(|| format!("failed to import {}", path.display()))?;
                let name = deck.name.clone();
                let id = self.manager.import_deck(deck)?;
                writeln!(out, "Deck '{name}' imported: {id}")?;
                Ok(())
            }
            Command::Study { id } => {
                self.deck(id)?;
                let stdin = std::io::stdin();
                self.study(id, stdin.lock(), out)
            }
        }
    }

    fn deck(&self, id: Uuid) -> Result<&Deck> {
        self.manager
            .get_deck_by_id(id)
            .ok_or_else(|| anyhow!("deck not found with ID: {id}"))
    }

    fn list_decks(&self, out: &mut impl Write) -> Result<()> {
        let mut decks = self.manager.get_all_decks();
        sort_decks_alphabetical(&mut decks);

        writeln!(out, "{} decks", self.manager.get_num_decks())?;
        for deck in decks {
            writeln!(out, "  {}  {} ({} cards)", deck.id, deck.name, deck.cards.len())?;
        }
        Ok(())
    }

    fn add_card(&mut self, args: AddCardArgs, out: &mut impl Write) -> Result<()> {
        let card = Card::validated(&args.question, &args.answer, parse_tags(&args.tags))
            .ok_or_else(|| anyhow!("question and answer must not be empty"))?;
        self.manager.add_card_to_deck(args.id, card)?;
        writeln!(out, "Card added ({} cards)", self.deck(args.id)?.cards.len())?;
        Ok(())
    }

    fn show_current(&mut self, id: Uuid, answer: bool, out: &mut impl Write) -> Result<()> {
        let card = self.manager.current_card(id)?.cloned();
        let deck = self.deck(id)?;
        match card {
            None => writeln!(out, "Deck is empty")?,
            Some(card) => write_card(out, &card, deck.current_id, deck.cards.len(), answer)?,
        }
        Ok(())
    }

    fn settings(&self, toggle: Option<SettingsField>, out: &mut impl Write) -> Result<()> {
        let storage = self.manager.storage();
        let mut settings = storage.load_settings()?;
        if let Some(field) = toggle {
            settings.toggle(field);
            storage.save_settings(&settings)?;
        }
        for field in SettingsField::ALL {
            let state = if settings.get(field) { "on" } else { "off" };
            writeln!(out, "{}: {state}", field.label())?;
        }
        Ok(())
    }

    /// Line-driven study loop: `n` next, `p` previous, `f` flip, `d` remove
    /// card (then `y` to confirm, `b` to cancel), `q` quit.
    pub fn study(&mut self, id: Uuid, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        let mut mode = Mode::DeckList.transition(Intent::OpenDeck, true);
        let mut show_answer = false;

        self.show_current(id, show_answer, out)?;
        for line in input.lines() {
            let line = line?;
            let key = line.trim();
            let has_cards = !self.deck(id)?.cards.is_empty();

            match (mode, key) {
                (_, "q") => break,
                (Mode::ViewCard, "f") => show_answer = !show_answer,
                (Mode::ViewCard, "n") => {
                    if let Err(err) = self.manager.next_card(id) {
                        error!(error = %err, "error selecting next card");
                    }
                    show_answer = false;
                }
                (Mode::ViewCard, "p") => {
                    if let Err(err) = self.manager.prev_card(id) {
                        error!(error = %err, "error selecting previous card");
                    }
                    show_answer = false;
                }
                (Mode::ViewCard, "d") => {
                    mode = mode.transition(Intent::DeleteCard, has_cards);
                    if mode == Mode::ConfirmRemoveCard {
                        writeln!(out, "Remove this card? (y/b)")?;
                        continue;
                    }
                }
                (Mode::ConfirmRemoveCard, "y") => {
                    let index = self.deck(id)?.current_id;
                    if let Err(err) = self.manager.remove_card_from_deck(id, index) {
                        error!(error = %err, "error removing card");
                    }
                    mode = mode.transition(Intent::Confirm, has_cards);
                    show_answer = false;
                }
                (Mode::ConfirmRemoveCard, "b") => mode = mode.transition(Intent::Back, has_cards),
                (Mode::ViewCard, "b") => {
                    mode = mode.transition(Intent::Back, has_cards);
                    if mode == Mode::DeckList {
                        break;
                    }
                }
                _ => {
                    writeln!(out, "Unknown command '{key}'")?;
                    continue;
                }
            }
            self.show_current(id, show_answer, out)?;
        }
        Ok(())
    }
}

fn write_card(
    out: &mut impl Write,
    card: &Card,
    index: usize,
    total: usize,
    show_answer: bool,
) -> std::io::Result<()> {
    writeln!(out, "[{}/{}] {}", index + 1, total, card.question)?;
    if !card.tags.is_empty() {
        writeln!(out, "  tags: {}", card.tags.join(", "))?;
    }
    if show_answer {
        writeln!(out, "  answer: {}", card.answer)?;
    }
    Ok(())
}
