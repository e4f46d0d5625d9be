//! Command line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use flashdeck::SettingsField;
use flashdeck::config::DATA_DIR_ENV;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "flashdeck",
    version,
    about = "Study flashcards from decks stored as YAML files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding `decks/` and `settings.yaml`.
    #[arg(long = "data-dir", env = DATA_DIR_ENV, default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Single-line log output.
    #[arg(long, global = true)]
    pub compact_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all decks, sorted by name.
    Decks,

    /// Create an empty deck.
    CreateDeck { name: String },

    /// Delete a deck and its file.
    DeleteDeck { id: Uuid },

    /// Append a card to a deck.
    AddCard(AddCardArgs),

    /// Remove the card at INDEX (zero-based) from a deck.
    RemoveCard { id: Uuid, index: usize },

    /// Show the current card of a deck.
    Show {
        id: Uuid,
        /// Also print the answer.
        #[arg(long)]
        answer: bool,
    },

    /// Move to the next card.
    Next { id: Uuid },

    /// Move to the previous card.
    Prev { id: Uuid },

    /// Show settings, or flip one of them.
    Settings {
        #[arg(long, value_enum)]
        toggle: Option<SettingArg>,
    },

    /// Write a deck to a JSON file.
    Export {
        id: Uuid,
        /// Output file (default: <deck name>-<date>.json).
        path: Option<PathBuf>,
    },

    /// Add a deck from a JSON file.
    Import { path: PathBuf },

    /// Study a deck interactively from stdin.
    Study { id: Uuid },
}

#[derive(Parser)]
pub struct AddCardArgs {
    pub id: Uuid,

    #[arg(short, long)]
    pub question: String,

    #[arg(short, long)]
    pub answer: String,

    /// Comma-separated tags.
    #[arg(short, long, default_value = "")]
    pub tags: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SettingArg {
    ChaosMode,
    ShowTimer,
    Audio,
}

impl From<SettingArg> for SettingsField {
    fn from(arg: SettingArg) -> Self {
        match arg {
            SettingArg::ChaosMode => SettingsField::ChaosMode,
            SettingArg::ShowTimer => SettingsField::ShowTimer,
            SettingArg::Audio => SettingsField::Audio,
        }
    }
}
