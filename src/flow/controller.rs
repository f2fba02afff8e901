//! Flow controller: the state machine driving every player interaction.
//!
//! Each public method is one player action (start a draw, toggle a card,
//! confirm, roll, answer a prompt). It validates the action against the
//! pending `FlowState`, performs the card movements through the
//! `DeckEngine`, and returns a `FlowStatus` describing what happens next.
//!
//! ## Flows
//!
//! - Draw and keep: `start_draw` / `start_question`, then `confirm` (or
//!   `cancel` to skip), then a mandatory overflow trim if the hand is over
//!   its limit
//! - Discard cost: `cast` on a `Cost::Discard` card, then `confirm`
//! - Dice cost: `cast` on a `Cost::Roll` card, then `roll` or `resolve_roll`
//! - Free cost: `cast` resolves immediately
//! - Factory reset: drag the reset slider past its threshold, then
//!   `answer_reset`
//!
//! A rejected or failed call leaves both the game state and the pending
//! flow unchanged. Every error is raised before the first card moves;
//! storage failures never fail a call (the engine logs them).

use tracing::{debug, info};

use super::{CastOutcome, FlowOutcome, FlowState, FlowStatus, Selection};
use crate::cards::{CardCatalog, CardInstance, CardUid, Cost, RollPolicy};
use crate::core::{DeckConfig, DeckError, GameState, QuestionKind, Result};
use crate::deck::{DeckEngine, HandAdd};
use crate::persistence::SnapshotStore;
use crate::presentation::{GestureOutcome, Notice, Presenter, ResetGesture, SelectionMode};

/// Title of the factory reset confirmation.
pub const RESET_TITLE: &str = "Factory Reset";

/// Body of the factory reset confirmation.
pub const RESET_BODY: &str =
    "Are you sure you want to delete all progress? This cannot be undone.";

/// Drives interaction flows over a `DeckEngine`.
#[derive(Debug)]
pub struct FlowController<S, P> {
    engine: DeckEngine<S, P>,
    flow: FlowState,
    gesture: ResetGesture,
}

impl<S: SnapshotStore, P: Presenter> FlowController<S, P> {
    /// Wrap an engine. No flow is pending.
    #[must_use]
    pub fn new(engine: DeckEngine<S, P>) -> Self {
        let config = engine.config();
        let gesture = ResetGesture::new(config.reset_thumb_width, config.reset_threshold);
        Self {
            engine,
            flow: FlowState::Idle,
            gesture,
        }
    }

    /// Open the stored game (or a fresh one) and wrap it.
    pub fn open(config: DeckConfig, catalog: CardCatalog, store: S, presenter: P) -> Result<Self> {
        Ok(Self::new(DeckEngine::open(config, catalog, store, presenter)?))
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &DeckEngine<S, P> {
        &self.engine
    }

    /// Give the engine back, dropping any pending flow.
    #[must_use]
    pub fn into_engine(self) -> DeckEngine<S, P> {
        self.engine
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    #[must_use]
    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.flow.is_idle()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        self.engine.presenter()
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        self.engine.presenter_mut()
    }

    #[must_use]
    pub fn gesture(&self) -> &ResetGesture {
        &self.gesture
    }

    /// The selection being made, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.flow.selection()
    }

    /// What the pending flow is waiting for.
    #[must_use]
    pub fn status(&self) -> FlowStatus {
        match &self.flow {
            FlowState::Idle => FlowStatus::Idle,
            FlowState::AwaitingKeepSelection { selection }
            | FlowState::AwaitingOverflowTrim { selection, .. }
            | FlowState::AwaitingCostSelection { selection, .. } => {
                FlowStatus::AwaitingSelection(selection.request())
            }
            FlowState::AwaitingRoll { .. } => FlowStatus::AwaitingRoll,
            FlowState::AwaitingResetConfirmation => FlowStatus::AwaitingConfirmation,
        }
    }

    // === Draw and Keep ===

    /// Draw `draw` cards and ask the player to keep `keep` of them.
    ///
    /// The keep target is clamped to the number of cards actually drawn and
    /// to the hand limit. Drawing nothing ends the flow at once.
    pub fn start_draw(&mut self, draw: usize, keep: usize) -> Result<FlowStatus> {
        self.ensure_idle()?;
        info!(draw, keep, "draw flow started");

        let drawn = self.engine.draw(draw)?;
        if drawn.is_empty() {
            return Ok(FlowStatus::Completed(FlowOutcome::NothingDrawn));
        }

        let keep = keep
            .min(drawn.len())
            .min(self.engine.state().max_hand_size());
        let selection = Selection::new(SelectionMode::Keep, drawn, keep);
        Ok(self.await_selection(FlowState::AwaitingKeepSelection { selection }))
    }

    /// Start the draw configured for a seeker question.
    pub fn start_question(&mut self, question: QuestionKind) -> Result<FlowStatus> {
        let rule = self
            .engine
            .config()
            .draw_rule(question)
            .ok_or(DeckError::NoDrawRule(question))?;
        debug!(%question, draw = rule.draw, keep = rule.keep, "question answered");
        self.start_draw(rule.draw, rule.keep)
    }

    fn finish_keep(&mut self, kept: Vec<CardUid>) -> Result<FlowStatus> {
        for uid in &kept {
            if let HandAdd::Overflow { .. } = self.engine.add_to_hand(uid)? {
                self.engine.keep_drawn(uid)?;
            }
        }
        let discarded = self.engine.discard_drawn()?;
        debug!(kept = kept.len(), discarded, "keep step resolved");

        let overflow = self.engine.state().overflow();
        if overflow == 0 {
            info!("draw flow completed");
            return Ok(FlowStatus::Completed(FlowOutcome::Drew {
                kept,
                trimmed: Vec::new(),
            }));
        }

        // Cards just kept are never offered for the trim
        let candidates: Vec<CardInstance> = self
            .engine
            .state()
            .hand
            .iter()
            .filter(|c| !kept.contains(&c.uid))
            .cloned()
            .collect();
        info!(overflow, "hand over limit, trim required");
        let selection = Selection::new(SelectionMode::Discard, candidates, overflow).mandatory();
        Ok(self.await_selection(FlowState::AwaitingOverflowTrim { kept, selection }))
    }

    fn finish_trim(&mut self, kept: Vec<CardUid>, trimmed: Vec<CardUid>) -> Result<FlowStatus> {
        for uid in &trimmed {
            self.engine.discard_by_uid(uid)?;
        }
        info!(trimmed = trimmed.len(), "draw flow completed");
        Ok(FlowStatus::Completed(FlowOutcome::Drew { kept, trimmed }))
    }

    // === Casting ===

    /// Cast a card from hand.
    ///
    /// Time bonus cards and discard costs the hand cannot pay are rejected
    /// with a notice and change nothing.
    pub fn cast(&mut self, uid: &CardUid) -> Result<FlowStatus> {
        self.ensure_idle()?;
        let card = self
            .engine
            .state()
            .find_in_hand(uid)
            .cloned()
            .ok_or_else(|| DeckError::CardNotFound(uid.clone()))?;

        if !card.template.kind.is_castable() {
            return Ok(self.reject(Notice::passive_card(card.title())));
        }

        info!(%uid, title = card.title(), cost = ?card.template.cost, "cast started");
        match card.template.cost {
            Cost::Discard(count) => {
                let others: Vec<CardInstance> = self
                    .engine
                    .state()
                    .hand
                    .iter()
                    .filter(|c| c.uid != card.uid)
                    .cloned()
                    .collect();
                if others.len() < count {
                    return Ok(self.reject(Notice::not_enough_cards()));
                }
                let selection = Selection::new(SelectionMode::Discard, others, count);
                Ok(self.await_selection(FlowState::AwaitingCostSelection {
                    cast: card.uid,
                    selection,
                }))
            }
            Cost::Roll => {
                self.flow = FlowState::AwaitingRoll { cast: card.uid };
                self.engine.presenter_mut().present_dice_roll();
                Ok(FlowStatus::AwaitingRoll)
            }
            Cost::Free => {
                self.engine.discard_by_uid(&card.uid)?;
                self.engine.notify(Notice::card_played(card.title()));
                Ok(FlowStatus::Completed(FlowOutcome::Cast {
                    uid: card.uid,
                    outcome: CastOutcome::Success,
                    roll: None,
                }))
            }
        }
    }

    fn finish_cost(&mut self, cast: CardUid, paid: Vec<CardUid>) -> Result<FlowStatus> {
        let card = self.engine.discard_by_uid(&cast)?;
        for uid in &paid {
            self.engine.discard_by_uid(uid)?;
        }
        info!(%cast, paid = paid.len(), "cast resolved");
        self.engine.notify(Notice::card_played(card.title()));
        Ok(FlowStatus::Completed(FlowOutcome::Cast {
            uid: cast,
            outcome: CastOutcome::Success,
            roll: None,
        }))
    }

    /// Roll the die for the pending dice cost.
    pub fn roll(&mut self) -> Result<FlowStatus> {
        if !matches!(self.flow, FlowState::AwaitingRoll { .. }) {
            return Err(self.wrong_step());
        }
        let value = self.engine.roll_die();
        self.resolve_roll(value)
    }

    /// Resolve the pending dice cost with a die value rolled elsewhere.
    pub fn resolve_roll(&mut self, value: u8) -> Result<FlowStatus> {
        let cast = match &self.flow {
            FlowState::AwaitingRoll { cast } => cast.clone(),
            _ => return Err(self.wrong_step()),
        };
        if !(1..=6).contains(&value) {
            return Err(DeckError::InvalidDieValue(value));
        }

        let card = self.engine.discard_by_uid(&cast)?;
        self.flow = FlowState::Idle;
        let (outcome, notice) = match card.template.roll_policy {
            RollPolicy::EvenFizzles if value % 2 == 0 => {
                (CastOutcome::Fizzled, Notice::cast_fizzled(value))
            }
            RollPolicy::EvenFizzles => (
                CastOutcome::Success,
                Notice::cast_succeeded(value, card.title()),
            ),
            RollPolicy::Informational => (
                CastOutcome::Activated,
                Notice::rolled_and_played(value, card.title()),
            ),
        };
        info!(%cast, roll = value, ?outcome, "dice cast resolved");
        self.engine.notify(notice);

        Ok(FlowStatus::Completed(FlowOutcome::Cast {
            uid: cast,
            outcome,
            roll: Some(value),
        }))
    }

    /// Roll a die outside of any flow. The game state is not touched.
    pub fn free_roll(&mut self) -> u8 {
        self.engine.roll_die()
    }

    // === Selection ===

    /// Toggle a card in the pending selection. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, uid: &CardUid) -> Result<bool> {
        if let Some(selection) = self.flow.selection_mut() {
            return Ok(selection.toggle(uid));
        }
        Err(self.wrong_step())
    }

    /// Replace the pending selection with `uids` and confirm it.
    pub fn choose(&mut self, uids: &[CardUid]) -> Result<FlowStatus> {
        match self.flow.selection_mut() {
            Some(selection) => {
                selection.clear();
                for uid in uids {
                    selection.toggle(uid);
                }
            }
            None => return Err(self.wrong_step()),
        }
        self.confirm()
    }

    /// Confirm the pending selection.
    pub fn confirm(&mut self) -> Result<FlowStatus> {
        let selection = self.flow.selection().ok_or_else(|| self.wrong_step())?;
        if !selection.can_confirm() {
            return Err(DeckError::SelectionIncomplete {
                required: selection.required(),
                selected: selection.selected().len(),
            });
        }

        match std::mem::take(&mut self.flow) {
            FlowState::AwaitingKeepSelection { selection } => {
                self.finish_keep(selection.into_selected())
            }
            FlowState::AwaitingOverflowTrim { kept, selection } => {
                self.finish_trim(kept, selection.into_selected())
            }
            FlowState::AwaitingCostSelection { cast, selection } => {
                self.finish_cost(cast, selection.into_selected())
            }
            other => {
                self.flow = other;
                Err(self.wrong_step())
            }
        }
    }

    /// Abandon the pending flow.
    ///
    /// Skipping the keep step discards every drawn card. The overflow trim
    /// cannot be cancelled. Every other step returns to idle unchanged.
    pub fn cancel(&mut self) -> Result<FlowStatus> {
        match std::mem::take(&mut self.flow) {
            FlowState::Idle => Err(DeckError::NoActiveFlow),
            FlowState::AwaitingKeepSelection { .. } => {
                let discarded = self.engine.discard_drawn()?;
                info!(discarded, "draw skipped");
                Ok(FlowStatus::Completed(FlowOutcome::Skipped { discarded }))
            }
            trim @ FlowState::AwaitingOverflowTrim { .. } => {
                self.flow = trim;
                Err(DeckError::SelectionRequired)
            }
            FlowState::AwaitingCostSelection { cast, .. } | FlowState::AwaitingRoll { cast } => {
                debug!(%cast, "cast cancelled");
                Ok(FlowStatus::Cancelled)
            }
            FlowState::AwaitingResetConfirmation => {
                self.gesture.reset();
                Ok(FlowStatus::Cancelled)
            }
        }
    }

    // === Factory Reset ===

    /// Put the pointer down on the reset slider.
    pub fn begin_reset_drag(&mut self, x: f32, track_width: f32) {
        self.gesture.begin(x, track_width);
    }

    /// Move the pointer on the reset slider.
    pub fn drag_reset(&mut self, x: f32) {
        self.gesture.drag(x);
    }

    /// Let go of the reset slider.
    ///
    /// An unlocked slider asks for confirmation right away. If another flow
    /// is pending the slider snaps back and `FlowInProgress` is returned.
    pub fn release_reset(&mut self) -> Result<GestureOutcome> {
        let outcome = self.gesture.release();
        if outcome == GestureOutcome::Unlocked {
            if let Err(err) = self.request_reset() {
                self.gesture.reset();
                return Err(err);
            }
        }
        Ok(outcome)
    }

    /// Ask for confirmation of a factory reset. The slider must be unlocked.
    pub fn request_reset(&mut self) -> Result<FlowStatus> {
        self.ensure_idle()?;
        if !self.gesture.is_unlocked() {
            return Err(DeckError::GestureLocked);
        }
        self.flow = FlowState::AwaitingResetConfirmation;
        self.engine
            .presenter_mut()
            .confirm_destructive(RESET_TITLE, RESET_BODY);
        Ok(FlowStatus::AwaitingConfirmation)
    }

    /// Answer the reset confirmation.
    ///
    /// `true` wipes the stored game and starts a fresh one. `false` leaves
    /// everything as it was. The slider returns to its start either way.
    pub fn answer_reset(&mut self, confirmed: bool) -> Result<FlowStatus> {
        if !matches!(self.flow, FlowState::AwaitingResetConfirmation) {
            return Err(self.wrong_step());
        }
        self.flow = FlowState::Idle;
        self.gesture.reset();

        if !confirmed {
            debug!("factory reset declined");
            return Ok(FlowStatus::Cancelled);
        }
        self.engine.reset();
        info!("factory reset");
        Ok(FlowStatus::Completed(FlowOutcome::Reset))
    }

    // === Helpers ===

    fn ensure_idle(&self) -> Result<()> {
        if self.flow.is_idle() {
            Ok(())
        } else {
            debug!(step = self.flow.step_name(), "flow already in progress");
            Err(DeckError::FlowInProgress)
        }
    }

    fn wrong_step(&self) -> DeckError {
        if self.flow.is_idle() {
            DeckError::NoActiveFlow
        } else {
            DeckError::WrongStep {
                step: self.flow.step_name(),
            }
        }
    }

    fn reject(&mut self, notice: Notice) -> FlowStatus {
        self.engine.notify(notice.clone());
        FlowStatus::Rejected(notice)
    }

    fn await_selection(&mut self, flow: FlowState) -> FlowStatus {
        let request = flow.selection().map(Selection::request);
        self.flow = flow;
        match request {
            Some(request) => {
                self.engine.presenter_mut().present_selection(&request);
                FlowStatus::AwaitingSelection(request)
            }
            None => self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardTemplate};
    use crate::persistence::MemoryStore;
    use crate::presentation::RecordingPresenter;

    fn card(uid: &str, cost: &str) -> CardInstance {
        let template = CardTemplate::new("action_test", CardKind::Action, "Test").with_cost_text(cost);
        CardInstance::new(template, CardUid::from(uid))
    }

    fn controller(hand: Vec<CardInstance>) -> FlowController<MemoryStore, RecordingPresenter> {
        let draw = (0..5).map(|i| card(&format!("d{i}"), "Free")).collect();
        let engine = DeckEngine::with_state(
            GameState::with_piles(draw, vec![], hand, 6),
            DeckConfig::default().with_seed(3),
            CardCatalog::standard(),
            MemoryStore::new(),
            RecordingPresenter::new(),
        )
        .unwrap();
        FlowController::new(engine)
    }

    #[test]
    fn test_input_without_flow() {
        let mut flow = controller(vec![]);

        assert!(matches!(flow.confirm(), Err(DeckError::NoActiveFlow)));
        assert!(matches!(flow.cancel(), Err(DeckError::NoActiveFlow)));
        assert!(matches!(flow.roll(), Err(DeckError::NoActiveFlow)));
        assert!(matches!(
            flow.toggle(&CardUid::from("d0")),
            Err(DeckError::NoActiveFlow)
        ));
    }

    #[test]
    fn test_wrong_step() {
        let mut flow = controller(vec![]);
        flow.start_draw(2, 1).unwrap();

        assert!(matches!(
            flow.resolve_roll(3),
            Err(DeckError::WrongStep { step: "keep selection" })
        ));
        assert!(matches!(
            flow.answer_reset(true),
            Err(DeckError::WrongStep { .. })
        ));
    }

    #[test]
    fn test_confirm_incomplete_selection() {
        let mut flow = controller(vec![]);
        flow.start_draw(3, 2).unwrap();

        let first = flow.selection().unwrap().candidates()[0].uid.clone();
        flow.toggle(&first).unwrap();

        assert!(matches!(
            flow.confirm(),
            Err(DeckError::SelectionIncomplete { required: 2, selected: 1 })
        ));
        assert!(matches!(flow.flow(), FlowState::AwaitingKeepSelection { .. }));
    }

    #[test]
    fn test_free_cast() {
        let mut flow = controller(vec![card("h0", "Free")]);

        let status = flow.cast(&CardUid::from("h0")).unwrap();
        assert_eq!(
            status,
            FlowStatus::Completed(FlowOutcome::Cast {
                uid: CardUid::from("h0"),
                outcome: CastOutcome::Success,
                roll: None,
            })
        );
        assert!(flow.state().hand.is_empty());
        assert_eq!(flow.state().discard_pile.len(), 1);
        assert_eq!(
            flow.presenter().last_notice(),
            Some(&Notice::card_played("Test"))
        );
    }

    #[test]
    fn test_resolve_roll_validates_value() {
        let mut flow = controller(vec![card("h0", "Roll a die")]);
        flow.cast(&CardUid::from("h0")).unwrap();

        assert!(matches!(
            flow.resolve_roll(7),
            Err(DeckError::InvalidDieValue(7))
        ));
        assert!(matches!(flow.resolve_roll(0), Err(DeckError::InvalidDieValue(0))));
        assert_eq!(flow.status(), FlowStatus::AwaitingRoll);
        assert_eq!(flow.state().hand.len(), 1);
    }

    #[test]
    fn test_free_roll_does_not_touch_state() {
        let mut flow = controller(vec![card("h0", "Free")]);
        let before = flow.state().clone();

        for _ in 0..20 {
            let roll = flow.free_roll();
            assert!((1..=6).contains(&roll));
        }
        assert_eq!(flow.state(), &before);
        assert!(flow.is_idle());
    }

    #[test]
    fn test_request_reset_needs_unlocked_gesture() {
        let mut flow = controller(vec![]);
        assert!(matches!(flow.request_reset(), Err(DeckError::GestureLocked)));
        assert!(flow.is_idle());
    }
}
