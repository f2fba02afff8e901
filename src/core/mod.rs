//! Core engine types: state, RNG, configuration, errors.
//!
//! These are the building blocks the deck engine and the flow controller
//! share. Nothing here knows about the presentation layer.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{DeckConfig, DrawRule, QuestionKind, DEFAULT_MAX_HAND_SIZE, DEFAULT_STORAGE_KEY};
pub use error::{DeckError, Result};
pub use rng::GameRng;
pub use state::GameState;
