//! Snapshot persistence.
//!
//! The game is saved under one fixed key after every mutation and loaded
//! once at startup. A missing, unparsable or inconsistent snapshot is not an
//! error for the caller: `load` returns `None` and the engine starts a fresh
//! game instead.

pub mod snapshot;
pub mod store;

pub use snapshot::Snapshot;
pub use store::{FileStore, MemoryStore, SnapshotStore};

use tracing::{debug, warn};

use crate::core::{GameState, Result};

/// Write a game state under `key`.
pub fn save<S: SnapshotStore + ?Sized>(store: &mut S, key: &str, state: &GameState) -> Result<()> {
    let json = Snapshot::capture(state).to_json()?;
    store.set(key, json)?;
    debug!(key, cards = state.total_cards(), "snapshot saved");
    Ok(())
}

/// Read the game state stored under `key`.
///
/// Returns `None` when nothing usable is stored.
pub fn load<S: SnapshotStore + ?Sized>(
    store: &S,
    key: &str,
    max_hand_size: usize,
) -> Option<GameState> {
    let json = match store.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(err) => {
            warn!(key, %err, "failed to read snapshot");
            return None;
        }
    };

    match Snapshot::from_json(&json).and_then(|s| s.into_state(max_hand_size)) {
        Ok(state) => {
            debug!(key, cards = state.total_cards(), "snapshot loaded");
            Some(state)
        }
        Err(err) => {
            warn!(key, %err, "discarding unusable snapshot");
            None
        }
    }
}

/// Delete the snapshot stored under `key`.
pub fn clear<S: SnapshotStore + ?Sized>(store: &mut S, key: &str) -> Result<()> {
    store.remove(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;
    use crate::core::GameRng;

    fn state() -> GameState {
        let mut rng = GameRng::new(1);
        let mut deck = CardCatalog::standard().inflate(&mut rng);
        let hand = deck.split_off(40);
        GameState::with_piles(deck, vec![], hand, 6)
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let original = state();

        save(&mut store, "k", &original).unwrap();
        let loaded = load(&store, "k", 6).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_and_garbage() {
        let store = MemoryStore::new();
        assert!(load(&store, "k", 6).is_none());

        let store = MemoryStore::with_entry("k", "]]]");
        assert!(load(&store, "k", 6).is_none());
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryStore::new();
        save(&mut store, "k", &state()).unwrap();
        clear(&mut store, "k").unwrap();
        assert!(store.raw("k").is_none());
    }
}
