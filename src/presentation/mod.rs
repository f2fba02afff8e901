//! Presentation-side contract.
//!
//! Rendering lives outside this crate. This module holds what the core
//! hands to it (`StateView`, `SelectionRequest`, `Notice`) and the
//! `Presenter` trait it is driven through, plus the reset slider model.

pub mod gesture;
pub mod notice;
pub mod presenter;

pub use gesture::{GestureOutcome, ResetGesture};
pub use notice::Notice;
pub use presenter::{
    NullPresenter, Presenter, PresenterEvent, RecordingPresenter, SelectionMode,
    SelectionRequest, StateView,
};
