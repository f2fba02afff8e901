//! Property tests.
//!
//! Random sequences of player actions must never create, lose or duplicate
//! a card, and must never leave the hand over its limit once idle.

use proptest::prelude::*;

use hider_deck::{
    CardCatalog, CardUid, DeckConfig, FlowController, FlowStatus, GameState, MemoryStore,
    NullPresenter, Snapshot,
};

/// One player action.
#[derive(Clone, Debug)]
enum Step {
    Draw { draw: usize, keep: usize },
    Skip { draw: usize },
    Cast { index: usize },
    AbandonCast { index: usize },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1usize..5, 0usize..4).prop_map(|(draw, keep)| Step::Draw { draw, keep }),
        (1usize..5).prop_map(|draw| Step::Skip { draw }),
        (0usize..8).prop_map(|index| Step::Cast { index }),
        (0usize..8).prop_map(|index| Step::AbandonCast { index }),
    ]
}

fn sorted_uids(state: &GameState) -> Vec<CardUid> {
    let mut uids: Vec<CardUid> = state.uids().cloned().collect();
    uids.sort();
    uids
}

/// Pick the first `n` candidates of the pending selection and confirm.
/// Repeats until the flow is no longer waiting for a selection.
fn settle(game: &mut FlowController<MemoryStore, NullPresenter>, mut status: FlowStatus) {
    loop {
        match status {
            FlowStatus::AwaitingSelection(request) => {
                let picks: Vec<CardUid> = request
                    .candidates
                    .iter()
                    .take(request.required)
                    .map(|c| c.uid.clone())
                    .collect();
                status = game.choose(&picks).unwrap();
            }
            FlowStatus::AwaitingRoll => {
                status = game.roll().unwrap();
            }
            _ => return,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cards_conserved(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..40)) {
        let mut game = FlowController::open(
            DeckConfig::default().with_seed(seed),
            CardCatalog::standard(),
            MemoryStore::new(),
            NullPresenter,
        )
        .unwrap();
        let expected = sorted_uids(game.state());
        prop_assert_eq!(expected.len(), 45);

        for step in steps {
            match step {
                Step::Draw { draw, keep } => {
                    let status = game.start_draw(draw, keep).unwrap();
                    settle(&mut game, status);
                }
                Step::Skip { draw } => {
                    if let FlowStatus::AwaitingSelection(_) = game.start_draw(draw, 1).unwrap() {
                        game.cancel().unwrap();
                    }
                }
                Step::Cast { index } => {
                    let uid = game.state().hand.get(index).map(|c| c.uid.clone());
                    if let Some(uid) = uid {
                        let status = game.cast(&uid).unwrap();
                        settle(&mut game, status);
                    }
                }
                Step::AbandonCast { index } => {
                    let uid = game.state().hand.get(index).map(|c| c.uid.clone());
                    if let Some(uid) = uid {
                        // Cost abandoned before it is paid
                        match game.cast(&uid).unwrap() {
                            FlowStatus::AwaitingSelection(_) | FlowStatus::AwaitingRoll => {
                                game.cancel().unwrap();
                            }
                            _ => {}
                        }
                    }
                }
            }

            prop_assert!(game.is_idle());
            prop_assert_eq!(sorted_uids(game.state()), expected.clone());
            prop_assert!(game.state().hand.len() <= game.state().max_hand_size());
            prop_assert!(game.state().revealed.is_empty());
            prop_assert!(game.state().check_invariants().is_ok());
        }

        let stored = Snapshot::from_json(game.engine().store().raw("glenwood_state").unwrap()).unwrap();
        prop_assert_eq!(stored, Snapshot::capture(game.state()));
    }

    #[test]
    fn prop_fresh_uids_unique(seed in any::<u64>()) {
        let game = FlowController::open(
            DeckConfig::default().with_seed(seed),
            CardCatalog::standard(),
            MemoryStore::new(),
            NullPresenter,
        )
        .unwrap();

        prop_assert!(game.state().check_invariants().is_ok());
        prop_assert!(game.state().uids().all(|uid| uid.as_str().len() == 9));
    }
}
