//! Error types for deck and flow operations.
//!
//! Nothing here is fatal. Callers report the error and the game state is
//! left exactly as it was before the failing call.

use thiserror::Error;

use super::config::QuestionKind;
use crate::cards::CardUid;

/// Errors returned by the deck engine and the flow controller.
#[derive(Debug, Error)]
pub enum DeckError {
    /// No card with this uid is where the operation looked for it.
    #[error("card {0} not found")]
    CardNotFound(CardUid),

    /// A flow is pending; a new one cannot start until it resolves.
    #[error("another interaction is already in progress")]
    FlowInProgress,

    /// Input arrived while no flow was waiting for it.
    #[error("no interaction is waiting for input")]
    NoActiveFlow,

    /// Input does not fit the pending step (e.g. a roll during a selection).
    #[error("the pending {step} step does not accept this input")]
    WrongStep { step: &'static str },

    /// Confirmation needs exactly `required` selected cards.
    #[error("select exactly {required} card(s), {selected} selected")]
    SelectionIncomplete { required: usize, selected: usize },

    /// The pending selection is mandatory and cannot be cancelled.
    #[error("this selection cannot be skipped")]
    SelectionRequired,

    /// A die value outside 1..=6.
    #[error("die value {0} is outside 1..=6")]
    InvalidDieValue(u8),

    /// The reset slider was not dragged far enough.
    #[error("reset gesture is not unlocked")]
    GestureLocked,

    /// No draw rule is configured for this question.
    #[error("no draw rule configured for {0}")]
    NoDrawRule(QuestionKind),

    /// The same uid appears twice across the piles.
    #[error("card uid {0} appears more than once")]
    DuplicateUid(CardUid),

    /// The snapshot store failed.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DeckError::CardNotFound(CardUid::from("abc"));
        assert_eq!(err.to_string(), "card abc not found");

        let err = DeckError::SelectionIncomplete { required: 2, selected: 1 };
        assert_eq!(err.to_string(), "select exactly 2 card(s), 1 selected");

        let err = DeckError::NoDrawRule(QuestionKind::Radar);
        assert_eq!(err.to_string(), "no draw rule configured for radar");
    }

    #[test]
    fn test_io_error_becomes_storage() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DeckError = io.into();
        assert_eq!(err.to_string(), "storage error: denied");

        let source = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
        assert_eq!(source.map(std::io::Error::kind), Some(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(err, DeckError::Storage(io) if io.kind() == std::io::ErrorKind::PermissionDenied));
    }
}
