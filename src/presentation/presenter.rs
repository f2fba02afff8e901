//! The presentation collaborator.
//!
//! The engine and the flow controller never draw anything themselves. They
//! describe what should be on screen through `Presenter`, and the player's
//! answers come back as calls on `FlowController`.

use serde::{Deserialize, Serialize};

use super::notice::Notice;
use crate::cards::CardInstance;
use crate::core::GameState;

/// Counts and hand contents to render after a state change.
#[derive(Clone, Copy, Debug)]
pub struct StateView<'a> {
    pub draw_count: usize,
    pub discard_count: usize,
    pub hand: &'a [CardInstance],
    pub max_hand_size: usize,
}

impl<'a> StateView<'a> {
    #[must_use]
    pub fn of(state: &'a GameState) -> Self {
        Self {
            draw_count: state.draw_pile.len(),
            discard_count: state.discard_pile.len(),
            hand: &state.hand,
            max_hand_size: state.max_hand_size(),
        }
    }
}

/// Why cards are being selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Pick drawn cards to add to the hand.
    Keep,
    /// Pick hand cards to discard.
    Discard,
}

/// A selection modal to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionRequest {
    pub mode: SelectionMode,
    /// Cards the player may pick from.
    pub candidates: Vec<CardInstance>,
    /// Exact number of cards to pick.
    pub required: usize,
    /// Can the modal be closed without picking?
    pub cancellable: bool,
}

impl SelectionRequest {
    /// Modal heading.
    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            SelectionMode::Keep => format!("Pick {} to Keep", self.required),
            SelectionMode::Discard => format!("Discard {} Cards", self.required),
        }
    }

    /// Modal instructions.
    #[must_use]
    pub fn description(&self) -> String {
        let plural = if self.required == 1 { "" } else { "s" };
        match self.mode {
            SelectionMode::Keep => {
                format!("Select {} card{plural} to add to your hand.", self.required)
            }
            SelectionMode::Discard => {
                format!("Select {} card{plural} to discard as cost.", self.required)
            }
        }
    }

    /// Label of the confirm button.
    #[must_use]
    pub fn confirm_label(&self) -> String {
        match self.mode {
            SelectionMode::Keep => format!("Keep {} Cards", self.required),
            SelectionMode::Discard => format!("Discard {} Cards", self.required),
        }
    }
}

/// Presentation collaborator contract.
pub trait Presenter {
    /// Piles changed.
    fn render_state(&mut self, view: &StateView<'_>);

    /// Ask the player to pick cards.
    fn present_selection(&mut self, request: &SelectionRequest);

    /// Show the dice modal and let the player roll.
    fn present_dice_roll(&mut self);

    /// Show a one-shot message.
    fn notify(&mut self, notice: &Notice);

    /// Ask for confirmation of a destructive action.
    fn confirm_destructive(&mut self, title: &str, body: &str);
}

/// Presenter that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_state(&mut self, _view: &StateView<'_>) {}
    fn present_selection(&mut self, _request: &SelectionRequest) {}
    fn present_dice_roll(&mut self) {}
    fn notify(&mut self, _notice: &Notice) {}
    fn confirm_destructive(&mut self, _title: &str, _body: &str) {}
}

/// A call received by `RecordingPresenter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterEvent {
    Render {
        draw_count: usize,
        discard_count: usize,
        hand_count: usize,
    },
    Selection(SelectionRequest),
    DiceRoll,
    Notice(Notice),
    Confirm {
        title: String,
        body: String,
    },
}

/// Presenter that records every call, for tests and headless use.
#[derive(Clone, Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received, oldest first.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.events.iter().filter_map(|e| match e {
            PresenterEvent::Notice(n) => Some(n),
            _ => None,
        })
    }

    /// The most recent notice.
    #[must_use]
    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices().last()
    }

    /// The most recent selection request.
    #[must_use]
    pub fn last_selection(&self) -> Option<&SelectionRequest> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Selection(r) => Some(r),
            _ => None,
        })
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn render_state(&mut self, view: &StateView<'_>) {
        self.events.push(PresenterEvent::Render {
            draw_count: view.draw_count,
            discard_count: view.discard_count,
            hand_count: view.hand.len(),
        });
    }

    fn present_selection(&mut self, request: &SelectionRequest) {
        self.events.push(PresenterEvent::Selection(request.clone()));
    }

    fn present_dice_roll(&mut self) {
        self.events.push(PresenterEvent::DiceRoll);
    }

    fn notify(&mut self, notice: &Notice) {
        self.events.push(PresenterEvent::Notice(notice.clone()));
    }

    fn confirm_destructive(&mut self, title: &str, body: &str) {
        self.events.push(PresenterEvent::Confirm {
            title: title.to_string(),
            body: body.to_string(),
        });
    }
}
