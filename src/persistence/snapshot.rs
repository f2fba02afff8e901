//! Persisted snapshot of the three piles.
//!
//! ```json
//! {"drawPile": [...], "discardPile": [...], "hand": [...]}
//! ```
//!
//! Each card is `{id, type, title, description, cost, count, uid}`. There is
//! no version field.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::core::{GameState, Result};

/// Serializable pile contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub draw_pile: Vec<CardInstance>,
    pub discard_pile: Vec<CardInstance>,
    pub hand: Vec<CardInstance>,
}

impl Snapshot {
    /// Capture a game state.
    ///
    /// Cards revealed by an unfinished draw are stored on the discard pile,
    /// the same place skipping the draw would have put them.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let mut discard_pile = state.discard_pile.clone();
        discard_pile.extend(state.revealed.iter().cloned());
        Self {
            draw_pile: state.draw_pile.clone(),
            discard_pile,
            hand: state.hand.clone(),
        }
    }

    /// Rebuild a game state, rejecting snapshots with duplicate uids.
    pub fn into_state(self, max_hand_size: usize) -> Result<GameState> {
        let state =
            GameState::with_piles(self.draw_pile, self.discard_pile, self.hand, max_hand_size);
        state.check_invariants()?;
        Ok(state)
    }

    /// Total number of cards in the snapshot.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.hand.len()
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardTemplate, CardUid};
    use crate::core::DeckError;

    fn card(uid: &str) -> CardInstance {
        let template = CardTemplate::new("action_barter", CardKind::Action, "Barter")
            .with_cost_text("Discard 1 card")
            .with_count(10);
        CardInstance::new(template, CardUid::from(uid))
    }

    #[test]
    fn test_field_names() {
        let snapshot = Snapshot {
            draw_pile: vec![card("a")],
            discard_pile: vec![],
            hand: vec![card("b")],
        };
        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert!(json["drawPile"].is_array());
        assert!(json["discardPile"].is_array());
        assert_eq!(json["hand"][0]["uid"], "b");
        assert_eq!(json["hand"][0]["cost"], "Discard 1 card");
    }

    #[test]
    fn test_capture_folds_revealed_into_discard() {
        let mut state = GameState::with_piles(vec![card("a")], vec![card("b")], vec![], 6);
        state.revealed.push(card("c"));

        let snapshot = Snapshot::capture(&state);
        assert_eq!(snapshot.total_cards(), 3);
        let discard: Vec<_> = snapshot.discard_pile.iter().map(|c| c.uid.as_str()).collect();
        assert_eq!(discard, vec!["b", "c"]);
    }

    #[test]
    fn test_into_state_rejects_duplicates() {
        let snapshot = Snapshot {
            draw_pile: vec![card("a")],
            discard_pile: vec![],
            hand: vec![card("a")],
        };
        assert!(matches!(
            snapshot.into_state(6),
            Err(DeckError::DuplicateUid(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Snapshot::from_json("{not json"),
            Err(DeckError::Snapshot(_))
        ));
        assert!(Snapshot::from_json(r#"{"drawPile": 3}"#).is_err());
    }
}
