//! Deck engine: draw, reshuffle, hand limit, discard.
//!
//! ## Key Types
//!
//! - `DeckEngine`: Owns the game state and performs every card movement
//! - `HandAdd`: Outcome of adding a drawn card to the hand

pub mod engine;

pub use engine::DeckEngine;

/// Outcome of `DeckEngine::add_to_hand`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandAdd {
    /// The card is now in hand.
    Added,
    /// The hand is full. The card was not added; `overflow` cards would have
    /// to be discarded to make room.
    Overflow { overflow: usize },
}
