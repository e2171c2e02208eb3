//! Property tests over arbitrary content sets, seeds, and tap sequences.

use proptest::prelude::*;

use memory_match::cards::{CardFace, ContentId};
use memory_match::core::{CardId, GameRng, GameState, IdAllocator};
use memory_match::selection::Resolution;

fn contents(pairs: usize) -> Vec<ContentId> {
    (0..pairs).map(|i| ContentId::new(format!("c{i}"))).collect()
}

fn deal(pairs: usize, seed: u64) -> GameState {
    GameState::deal(&contents(pairs), &mut GameRng::new(seed), &mut IdAllocator::new())
        .expect("generated contents are distinct")
}

/// Invariants that hold after any operation.
fn check_invariants(state: &GameState) {
    let cards = state.cards();

    // Matched cards are face-up, and come in whole pairs per content
    for card in cards.iter() {
        if card.matched {
            assert!(card.face_up);
            let twins = cards
                .iter()
                .filter(|c| c.content == card.content && c.matched)
                .count();
            assert_eq!(twins, 2);
        }
    }

    // Pending cards are exactly the face-up unmatched ones
    let pending = state.pending();
    assert!(pending.len() <= 2);
    let showing: Vec<CardId> = cards
        .iter()
        .filter(|c| c.face() == CardFace::FaceUp)
        .map(|c| c.id)
        .collect();
    assert_eq!(showing.len(), pending.len());
    for id in &showing {
        assert!(pending.contains(id));
    }

    let progress = state.progress();
    assert!((0.0..=1.0).contains(&progress));
}

proptest! {
    #[test]
    fn prop_deal_makes_face_down_pairs(pairs in 0usize..20, seed in any::<u64>()) {
        let state = deal(pairs, seed);

        prop_assert_eq!(state.cards().len(), pairs * 2);
        for content in contents(pairs) {
            let count = state.cards().iter().filter(|c| c.content == content).count();
            prop_assert_eq!(count, 2);
        }
        prop_assert!(state.cards().iter().all(|c| c.face() == CardFace::FaceDown));
        prop_assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn prop_random_taps_keep_invariants(
        pairs in 1usize..8,
        seed in any::<u64>(),
        taps in prop::collection::vec((0usize..16, any::<bool>()), 0..60),
    ) {
        let mut state = deal(pairs, seed);
        let mut last_progress = 0.0;

        for (position, clear) in taps {
            let id = state.cards()[position % state.cards().len()].id;
            let before = state.snapshot();
            let resolution = state.select(id);

            if resolution == Resolution::Ignored {
                prop_assert_eq!(&state.snapshot(), &before);
            }
            if clear {
                state.clear_unmatched_selections();
            }

            check_invariants(&state);
            prop_assert!(state.progress() >= last_progress);
            last_progress = state.progress();
        }
    }

    #[test]
    fn prop_matching_every_pair_completes(pairs in 1usize..12, seed in any::<u64>()) {
        let mut state = deal(pairs, seed);

        for content in contents(pairs) {
            let ids: Vec<_> = state
                .cards()
                .iter()
                .filter(|c| c.content == content)
                .map(|c| c.id)
                .collect();
            state.select(ids[0]);
            let resolution = state.select(ids[1]);
            prop_assert_eq!(resolution, Resolution::Matched(ids[0], ids[1]));
        }

        prop_assert_eq!(state.progress(), 1.0);
        prop_assert!(state.is_complete());
    }
}
