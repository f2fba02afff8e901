//! Game state: the three piles plus cards revealed by an unfinished draw.
//!
//! ## Piles
//!
//! - `draw_pile`: face-down stack, top = end of vec
//! - `discard_pile`: face-up stack of spent or skipped cards
//! - `hand`: cards held by the player
//! - `revealed`: cards taken off the draw pile and shown to the player but
//!   not yet kept or discarded. Empty whenever no draw flow is pending.
//!
//! Cards are only ever moved between these sequences, never created or
//! destroyed after the deck is built.

use rustc_hash::FxHashSet;

use super::error::{DeckError, Result};
use crate::cards::{CardInstance, CardUid};

/// Complete game state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    /// Face-down draw pile (top = last).
    pub draw_pile: Vec<CardInstance>,

    /// Face-up discard pile (top = last).
    pub discard_pile: Vec<CardInstance>,

    /// Cards in hand, in the order they were added.
    pub hand: Vec<CardInstance>,

    /// Drawn cards awaiting a keep decision.
    pub revealed: Vec<CardInstance>,

    max_hand_size: usize,
}

impl GameState {
    /// Create an empty state with the given hand limit.
    #[must_use]
    pub fn new(max_hand_size: usize) -> Self {
        Self {
            max_hand_size,
            ..Self::default()
        }
    }

    /// Create a state from explicit piles.
    #[must_use]
    pub fn with_piles(
        draw_pile: Vec<CardInstance>,
        discard_pile: Vec<CardInstance>,
        hand: Vec<CardInstance>,
        max_hand_size: usize,
    ) -> Self {
        Self {
            draw_pile,
            discard_pile,
            hand,
            revealed: Vec::new(),
            max_hand_size,
        }
    }

    /// Hand limit.
    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    /// Total number of cards across every pile.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hand.len() + self.revealed.len()
    }

    /// Is the hand at or above its limit?
    #[must_use]
    pub fn hand_is_full(&self) -> bool {
        self.hand.len() >= self.max_hand_size
    }

    /// Number of hand cards above the limit (0 when within it).
    #[must_use]
    pub fn overflow(&self) -> usize {
        self.hand.len().saturating_sub(self.max_hand_size)
    }

    /// Find a card in hand.
    #[must_use]
    pub fn find_in_hand(&self, uid: &CardUid) -> Option<&CardInstance> {
        self.hand.iter().find(|c| &c.uid == uid)
    }

    /// Iterate over every uid in every pile.
    pub fn uids(&self) -> impl Iterator<Item = &CardUid> {
        self.draw_pile
            .iter()
            .chain(&self.discard_pile)
            .chain(&self.hand)
            .chain(&self.revealed)
            .map(|c| &c.uid)
    }

    /// Verify that no uid appears more than once.
    pub fn check_invariants(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for uid in self.uids() {
            if !seen.insert(uid) {
                return Err(DeckError::DuplicateUid(uid.clone()));
            }
        }
        Ok(())
    }
}
