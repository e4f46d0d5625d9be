//! User preferences, stored apart from the decks.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chaos_mode: bool,
    pub show_timer: bool,
    pub audio: bool,
}

/// One of the boolean toggles in [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ChaosMode,
    ShowTimer,
    Audio,
}

impl SettingsField {
    pub const ALL: [SettingsField; 3] = [Self::ChaosMode, Self::ShowTimer, Self::Audio];

    pub fn label(self) -> &'static str {
        match self {
            Self::ChaosMode => "Chaos mode",
            Self::ShowTimer => "Show timer",
            Self::Audio => "Audio",
        }
    }
}

impl Settings {
    pub fn get(&self, field: SettingsField) -> bool {
        match field {
            SettingsField::ChaosMode => self.chaos_mode,
            SettingsField::ShowTimer => self.show_timer,
            SettingsField::Audio => self.audio,
        }
    }

    /// Flips one toggle and returns its new value.
    pub fn toggle(&mut self, field: SettingsField) -> bool {
        let value = match field {
            SettingsField::ChaosMode => &mut self.chaos_mode,
            SettingsField::ShowTimer => &mut self.show_timer,
            SettingsField::Audio => &mut self.audio,
        };
        *value = !*value;
        *value
    }
}
