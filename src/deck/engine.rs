//! Deck engine: the only code that moves cards between piles.
//!
//! The `DeckEngine` owns the `GameState`, the snapshot store and the
//! presenter. Every mutating operation:
//! - leaves uids unique and the card total unchanged
//! - persists the state, except while a draw waits for the hand to be
//!   trimmed back to its limit
//! - asks the presenter to re-render
//!
//! A failed save is logged and does not undo the mutation: the in-memory
//! game stays authoritative and the next mutation saves again.
//!
//! ## Usage
//!
//! ```
//! use hider_deck::cards::CardCatalog;
//! use hider_deck::core::DeckConfig;
//! use hider_deck::deck::DeckEngine;
//! use hider_deck::persistence::MemoryStore;
//! use hider_deck::presentation::NullPresenter;
//!
//! let mut engine = DeckEngine::fresh(
//!     DeckConfig::default().with_seed(7),
//!     CardCatalog::standard(),
//!     MemoryStore::new(),
//!     NullPresenter,
//! )
//! .unwrap();
//!
//! let drawn = engine.draw(3).unwrap();
//! assert_eq!(drawn.len(), 3);
//! assert_eq!(engine.state().draw_pile.len(), 42);
//! ```

use tracing::{debug, info, warn};

use super::HandAdd;
use crate::cards::{CardCatalog, CardInstance, CardUid};
use crate::core::{DeckConfig, DeckError, GameRng, GameState, Result};
use crate::persistence::{self, SnapshotStore};
use crate::presentation::{Notice, Presenter, StateView};

/// Owner of the game state.
#[derive(Debug)]
pub struct DeckEngine<S, P> {
    state: GameState,
    catalog: CardCatalog,
    config: DeckConfig,
    rng: GameRng,
    store: S,
    presenter: P,
    /// A kept card pushed the hand over its limit; saves wait for the trim.
    trim_pending: bool,
}

impl<S: SnapshotStore, P: Presenter> DeckEngine<S, P> {
    /// Continue the stored game, or start a fresh one if nothing usable is
    /// stored.
    pub fn open(config: DeckConfig, catalog: CardCatalog, store: S, presenter: P) -> Result<Self> {
        match persistence::load(&store, &config.storage_key, config.max_hand_size) {
            Some(state) => {
                info!(cards = state.total_cards(), "game loaded from storage");
                let mut engine = Self::assemble(state, config, catalog, store, presenter);
                engine.render();
                Ok(engine)
            }
            None => Self::fresh(config, catalog, store, presenter),
        }
    }

    /// Start a fresh shuffled game, overwriting whatever is stored.
    pub fn fresh(config: DeckConfig, catalog: CardCatalog, store: S, presenter: P) -> Result<Self> {
        let state = GameState::new(config.max_hand_size);
        let mut engine = Self::assemble(state, config, catalog, store, presenter);
        engine.rebuild();
        Ok(engine)
    }

    /// Run with an explicit state (e.g. a prepared test position).
    ///
    /// The state is checked for duplicate uids and persisted.
    pub fn with_state(
        state: GameState,
        config: DeckConfig,
        catalog: CardCatalog,
        store: S,
        presenter: P,
    ) -> Result<Self> {
        state.check_invariants()?;
        let mut engine = Self::assemble(state, config, catalog, store, presenter);
        engine.commit();
        Ok(engine)
    }

    fn assemble(
        state: GameState,
        config: DeckConfig,
        catalog: CardCatalog,
        store: S,
        presenter: P,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!(seed = rng.seed(), "deck engine rng ready");
        Self {
            state,
            catalog,
            config,
            rng,
            store,
            presenter,
            trim_pending: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Number of cards in the game, wherever they are.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.state.total_cards()
    }

    // === Randomness ===

    /// Shuffle any sequence with the engine RNG.
    pub fn shuffle<T>(&mut self, sequence: &mut [T]) {
        self.rng.shuffle(sequence);
    }

    /// Roll a six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        let roll = self.rng.roll_die();
        debug!(roll, "die rolled");
        roll
    }

    // === Pile Operations ===

    /// Draw up to `count` cards from the top of the draw pile.
    ///
    /// If the draw pile is short and the discard pile is not empty, the
    /// discard pile is moved onto the draw pile and the whole pile shuffled
    /// first. Fewer than `count` cards (possibly none) are returned when both
    /// piles run out; the presenter is told the deck is empty.
    ///
    /// Drawn cards stay revealed until kept or discarded.
    pub fn draw(&mut self, count: usize) -> Result<Vec<CardInstance>> {
        if self.state.draw_pile.len() < count && !self.state.discard_pile.is_empty() {
            self.reshuffle_discard();
        }

        let available = count.min(self.state.draw_pile.len());
        let at = self.state.draw_pile.len() - available;
        // Top of the pile comes out first
        let drawn: Vec<CardInstance> = self.state.draw_pile.drain(at..).rev().collect();

        if drawn.len() < count {
            warn!(requested = count, drawn = drawn.len(), "deck empty");
            self.presenter.notify(&Notice::deck_empty());
        }

        self.state.revealed.extend(drawn.iter().cloned());
        debug!(count = drawn.len(), "cards drawn");
        self.commit();
        Ok(drawn)
    }

    fn reshuffle_discard(&mut self) {
        info!(
            cards = self.state.discard_pile.len(),
            "reshuffling discard pile into deck"
        );
        let mut discard = std::mem::take(&mut self.state.discard_pile);
        self.state.draw_pile.append(&mut discard);
        self.rng.shuffle(&mut self.state.draw_pile);
    }

    /// Move a revealed card into the hand if there is room.
    ///
    /// At the limit the card stays revealed and `HandAdd::Overflow` reports
    /// how many cards would have to go.
    pub fn add_to_hand(&mut self, uid: &CardUid) -> Result<HandAdd> {
        let index = self.revealed_index(uid)?;
        if self.state.hand_is_full() {
            let overflow = self.state.hand.len() + 1 - self.state.max_hand_size();
            debug!(%uid, overflow, "hand full");
            return Ok(HandAdd::Overflow { overflow });
        }
        let card = self.state.revealed.remove(index);
        self.state.hand.push(card);
        self.commit();
        Ok(HandAdd::Added)
    }

    /// Move a revealed card into the hand regardless of the limit.
    ///
    /// Only a draw flow may do this; it must trim the hand before it ends.
    /// Saving is held back until the hand is within its limit again.
    pub fn keep_drawn(&mut self, uid: &CardUid) -> Result<()> {
        let index = self.revealed_index(uid)?;
        let card = self.state.revealed.remove(index);
        self.state.hand.push(card);
        self.trim_pending = self.state.overflow() > 0;
        self.commit();
        Ok(())
    }

    /// Is a draw waiting for the hand to be trimmed?
    #[must_use]
    pub fn trim_pending(&self) -> bool {
        self.trim_pending
    }

    /// Discard every revealed card. Returns how many were discarded.
    pub fn discard_drawn(&mut self) -> Result<usize> {
        let count = self.state.revealed.len();
        let mut revealed = std::mem::take(&mut self.state.revealed);
        self.state.discard_pile.append(&mut revealed);
        self.commit();
        Ok(count)
    }

    /// Move a hand card to the discard pile.
    ///
    /// Changes nothing and returns `CardNotFound` if no hand card has `uid`.
    pub fn discard_by_uid(&mut self, uid: &CardUid) -> Result<CardInstance> {
        let index = self
            .state
            .hand
            .iter()
            .position(|c| &c.uid == uid)
            .ok_or_else(|| DeckError::CardNotFound(uid.clone()))?;

        let card = self.state.hand.remove(index);
        self.state.discard_pile.push(card.clone());
        debug!(%uid, title = card.title(), "card discarded");
        self.commit();
        Ok(card)
    }

    /// Notify the presenter.
    pub fn notify(&mut self, notice: Notice) {
        info!(title = %notice.title, body = %notice.body, "notice");
        self.presenter.notify(&notice);
    }

    // === Lifecycle ===

    /// Delete the stored game and start over with a freshly shuffled deck.
    pub fn reset(&mut self) {
        if let Err(err) = persistence::clear(&mut self.store, &self.config.storage_key) {
            warn!(%err, "failed to clear stored game");
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut deck = self.catalog.inflate(&mut self.rng);
        self.rng.shuffle(&mut deck);
        self.state = GameState::with_piles(deck, Vec::new(), Vec::new(), self.config.max_hand_size);
        self.trim_pending = false;
        info!(cards = self.state.total_cards(), "new game initialized");
        self.commit();
    }

    fn revealed_index(&self, uid: &CardUid) -> Result<usize> {
        self.state
            .revealed
            .iter()
            .position(|c| &c.uid == uid)
            .ok_or_else(|| DeckError::CardNotFound(uid.clone()))
    }

    /// Persist and re-render.
    fn commit(&mut self) {
        if self.trim_pending && self.state.overflow() > 0 {
            debug!(overflow = self.state.overflow(), "save deferred until hand is trimmed");
        } else {
            self.trim_pending = false;
            if let Err(err) = persistence::save(&mut self.store, &self.config.storage_key, &self.state) {
                warn!(%err, "failed to save game");
            }
        }
        self.render();
    }

    fn render(&mut self) {
        self.presenter.render_state(&StateView::of(&self.state));
    }
}
