//! Interaction flows.
//!
//! Every multi-step interaction (draw and keep, paying a discard cost,
//! rolling for a dice cost, confirming a reset) is a named `FlowState`. The
//! controller moves between states only when the player's answer arrives as
//! a call, and at most one flow is pending at a time.
//!
//! ## Key Types
//!
//! - `FlowController`: Owns the deck engine and the pending flow
//! - `FlowState`: Which decision is pending
//! - `FlowStatus`: What a controller call resulted in
//! - `Selection`: Exact-count toggle model behind every selection step

pub mod controller;
pub mod selection;

pub use controller::FlowController;
pub use selection::Selection;

use crate::cards::CardUid;
use crate::presentation::{Notice, SelectionRequest};

/// The pending decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing pending.
    #[default]
    Idle,

    /// Drawn cards are revealed; the player picks which to keep.
    AwaitingKeepSelection { selection: Selection },

    /// The hand is over its limit after keeping; the player picks cards to
    /// discard. `kept` are the cards just added, which are not candidates.
    AwaitingOverflowTrim {
        kept: Vec<CardUid>,
        selection: Selection,
    },

    /// The player picks the cards paying for `cast`.
    AwaitingCostSelection { cast: CardUid, selection: Selection },

    /// Waiting for the die roll paying for `cast`.
    AwaitingRoll { cast: CardUid },

    /// Waiting for the player to confirm the factory reset.
    AwaitingResetConfirmation,
}

impl FlowState {
    /// Short name of the step, for errors and logs.
    #[must_use]
    pub fn step_name(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::AwaitingKeepSelection { .. } => "keep selection",
            FlowState::AwaitingOverflowTrim { .. } => "overflow trim",
            FlowState::AwaitingCostSelection { .. } => "cost selection",
            FlowState::AwaitingRoll { .. } => "dice roll",
            FlowState::AwaitingResetConfirmation => "reset confirmation",
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    /// The selection being made, if this step is a selection.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        match self {
            FlowState::AwaitingKeepSelection { selection }
            | FlowState::AwaitingOverflowTrim { selection, .. }
            | FlowState::AwaitingCostSelection { selection, .. } => Some(selection),
            _ => None,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut Selection> {
        match self {
            FlowState::AwaitingKeepSelection { selection }
            | FlowState::AwaitingOverflowTrim { selection, .. }
            | FlowState::AwaitingCostSelection { selection, .. } => Some(selection),
            _ => None,
        }
    }
}

/// How a cast resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    /// The card took effect.
    Success,
    /// An even roll under an even-fizzles policy; the card was discarded
    /// without effect.
    Fizzled,
    /// A dice card whose roll is informational took effect.
    Activated,
}

/// A finished flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The draw found no cards at all.
    NothingDrawn,

    /// Drawn cards were kept. `trimmed` are the hand cards discarded to get
    /// back under the limit.
    Drew {
        kept: Vec<CardUid>,
        trimmed: Vec<CardUid>,
    },

    /// The keep step was skipped; all drawn cards were discarded.
    Skipped { discarded: usize },

    /// A card was cast and discarded.
    Cast {
        uid: CardUid,
        outcome: CastOutcome,
        roll: Option<u8>,
    },

    /// The game was reset.
    Reset,
}

/// Result of a controller call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowStatus {
    /// No flow pending.
    Idle,
    /// Waiting for the player to pick cards.
    AwaitingSelection(SelectionRequest),
    /// Waiting for a die roll.
    AwaitingRoll,
    /// Waiting for a yes/no answer.
    AwaitingConfirmation,
    /// The flow finished.
    Completed(FlowOutcome),
    /// The request was refused; nothing changed.
    Rejected(Notice),
    /// The flow was abandoned; nothing changed.
    Cancelled,
}

impl FlowStatus {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            FlowStatus::AwaitingSelection(_)
                | FlowStatus::AwaitingRoll
                | FlowStatus::AwaitingConfirmation
        )
    }
}
