//! Study screen states and the transitions between them.
//!
//! The deck core does not depend on this module.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    DeckList,
    ViewCard,
    ConfirmRemoveCard,
}

/// What the user asked for, independent of key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    OpenDeck,
    DeleteCard,
    Confirm,
    Back,
}

impl Mode {
    /// Next mode for `intent`. Pairs not listed keep the current mode.
    ///
    /// `has_cards` tells whether the open deck has any cards; removing a card
    /// from an empty deck is not offered.
    pub fn transition(self, intent: Intent, has_cards: bool) -> Mode {
        use Intent as I;
        use Mode as M;

        match (self, intent) {
            (M::DeckList, I::OpenDeck) => M::ViewCard,

            (M::ViewCard, I::DeleteCard) if has_cards => M::ConfirmRemoveCard,
            (M::ViewCard, I::Back) => M::DeckList,

            (M::ConfirmRemoveCard, I::Confirm | I::Back) => M::ViewCard,

            (mode, _) => mode,
        }
    }
}
