//! Exact-count card selection.
//!
//! Toggling adds a candidate until `required` cards are selected and removes
//! an already selected one. Cards that are not candidates are ignored.
//! Confirmation is possible only with exactly `required` cards selected.

use smallvec::SmallVec;

use crate::cards::{CardInstance, CardUid};
use crate::presentation::{SelectionMode, SelectionRequest};

/// A pending card selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    candidates: Vec<CardInstance>,
    required: usize,
    cancellable: bool,
    selected: SmallVec<[CardUid; 8]>,
}

impl Selection {
    /// Select exactly `required` of `candidates`.
    #[must_use]
    pub fn new(mode: SelectionMode, candidates: Vec<CardInstance>, required: usize) -> Self {
        Self {
            mode,
            candidates,
            required,
            cancellable: true,
            selected: SmallVec::new(),
        }
    }

    /// Make the selection impossible to cancel.
    #[must_use]
    pub fn mandatory(mut self) -> Self {
        self.cancellable = false;
        self
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub fn required(&self) -> usize {
        self.required
    }

    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        self.cancellable
    }

    #[must_use]
    pub fn candidates(&self) -> &[CardInstance] {
        &self.candidates
    }

    /// Selected uids, in the order they were picked.
    #[must_use]
    pub fn selected(&self) -> &[CardUid] {
        &self.selected
    }

    #[must_use]
    pub fn is_candidate(&self, uid: &CardUid) -> bool {
        self.candidates.iter().any(|c| &c.uid == uid)
    }

    #[must_use]
    pub fn is_selected(&self, uid: &CardUid) -> bool {
        self.selected.contains(uid)
    }

    /// Toggle a card. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, uid: &CardUid) -> bool {
        if !self.is_candidate(uid) {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|s| s == uid) {
            self.selected.remove(pos);
            return false;
        }
        if self.selected.len() < self.required {
            self.selected.push(uid.clone());
            return true;
        }
        false
    }

    /// Drop every selected card.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Is the selection complete?
    ///
    /// A target larger than the candidate list can never be met.
    #[must_use]
    pub fn can_confirm(&self) -> bool {
        self.required <= self.candidates.len() && self.selected.len() == self.required
    }

    /// What the presenter should show for this selection.
    #[must_use]
    pub fn request(&self) -> SelectionRequest {
        SelectionRequest {
            mode: self.mode,
            candidates: self.candidates.clone(),
            required: self.required,
            cancellable: self.cancellable,
        }
    }

    /// Consume the selection, returning the selected uids.
    #[must_use]
    pub fn into_selected(self) -> Vec<CardUid> {
        self.selected.into_vec()
    }
}
