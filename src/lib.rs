//! # hider-deck
//!
//! Deck, hand and interaction-flow engine for the hider in a hide-and-seek
//! card game.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: `FlowController` owns the `DeckEngine`, which owns the
//!    `GameState`, the snapshot store and the presenter. There is no global
//!    state.
//!
//! 2. **Explicit Flows**: Every pending player decision is a `FlowState`
//!    variant. The player's answer arrives as the next controller call.
//!
//! 3. **Conservation**: Cards are built once and only ever moved. Every uid
//!    is unique across the piles at all times.
//!
//! ## Modules
//!
//! - `core`: Game state, configuration, RNG, errors
//! - `cards`: Card templates, instances and the standard deck
//! - `deck`: Deck engine (draw, reshuffle, hand limit, discard)
//! - `persistence`: JSON snapshots and key-value stores
//! - `presentation`: Presenter trait, notices, reset slider
//! - `flow`: Interaction flow state machine
//!
//! ## Example
//!
//! ```
//! use hider_deck::{
//!     CardCatalog, DeckConfig, FlowController, FlowStatus, MemoryStore, QuestionKind,
//!     RecordingPresenter,
//! };
//!
//! let mut game = FlowController::open(
//!     DeckConfig::default().with_seed(42),
//!     CardCatalog::standard(),
//!     MemoryStore::new(),
//!     RecordingPresenter::new(),
//! )
//! .unwrap();
//!
//! // Radar: draw 3, keep 1
//! let status = game.start_question(QuestionKind::Radar).unwrap();
//! let FlowStatus::AwaitingSelection(request) = status else {
//!     panic!("expected a selection");
//! };
//! assert_eq!(request.candidates.len(), 3);
//!
//! let keep = request.candidates[0].uid.clone();
//! game.choose(&[keep]).unwrap();
//!
//! assert_eq!(game.state().hand.len(), 1);
//! assert_eq!(game.state().discard_pile.len(), 2);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod flow;
pub mod persistence;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckError, DrawRule, GameRng, GameState, QuestionKind, Result};

pub use crate::cards::{CardCatalog, CardInstance, CardKind, CardTemplate, CardUid, Cost, RollPolicy};

pub use crate::deck::{DeckEngine, HandAdd};

pub use crate::persistence::{FileStore, MemoryStore, Snapshot, SnapshotStore};

pub use crate::presentation::{
    GestureOutcome, Notice, NullPresenter, Presenter, PresenterEvent, RecordingPresenter,
    ResetGesture, SelectionMode, SelectionRequest, StateView,
};

pub use crate::flow::{CastOutcome, FlowController, FlowOutcome, FlowState, FlowStatus, Selection};
