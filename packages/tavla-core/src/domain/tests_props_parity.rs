//! Property tests: the mirror evaluator must equal the engine's
//! enumeration, as a set, for any snapshot of any state.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::board::POINTS;
use crate::domain::dice::DiceRoller;
use crate::domain::mirror;
use crate::domain::moves::{self, Move, MoveFrom, MoveTo};
use crate::domain::rules;
use crate::domain::snapshot::snapshot;
use crate::domain::state::{GameState, Phase};
use crate::domain::test_gens;

fn engine_set(state: &GameState) -> HashSet<Move> {
    state.legal_moves().into_iter().collect()
}

fn mirror_set(state: &GameState) -> HashSet<Move> {
    mirror::all_legal_moves(&snapshot(state)).into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn mirror_matches_engine_on_synthetic_positions(
        board in test_gens::board(),
        player in test_gens::player(),
        dice in test_gens::dice_pool(),
    ) {
        let mut state = GameState::default();
        state.board = board;
        state.current_player = player;
        state.dice.set_remaining_for_test(&dice);
        state.phase = Phase::AwaitingMove;

        let engine = engine_set(&state);
        let mirrored = mirror_set(&state);
        prop_assert_eq!(&engine, &mirrored);

        // Per-origin highlighting agrees with the canonical enumeration.
        let snap = snapshot(&state);
        let origins = (0..POINTS)
            .map(|index| MoveFrom::Point(index as u8))
            .chain([MoveFrom::Bar]);
        for origin in origins {
            let highlighted: HashSet<MoveTo> =
                mirror::legal_destinations_from(&snap, origin).into_iter().collect();
            let expected: HashSet<MoveTo> = engine
                .iter()
                .filter(|mv| mv.from == origin)
                .map(|mv| mv.to)
                .collect();
            prop_assert_eq!(highlighted, expected);
        }

        prop_assert_eq!(
            mirror::can_bear_off(&snap, player),
            rules::can_bear_off(&state.board, player)
        );
    }

    #[test]
    fn mirror_matches_engine_along_random_games(
        seed in any::<u64>(),
        choices in proptest::collection::vec(any::<u16>(), 1..150),
    ) {
        let mut state = GameState::default();
        let mut roller = DiceRoller::seeded(seed);

        for &choice in &choices {
            prop_assert_eq!(engine_set(&state), mirror_set(&state));

            match state.phase {
                Phase::AwaitingRoll => {
                    moves::roll_dice(&mut state, &mut roller).unwrap();
                }
                Phase::AwaitingMove => {
                    let legal = state.legal_moves();
                    let mv = legal[choice as usize % legal.len()];
                    moves::apply_move(&mut state, mv).unwrap();
                }
                Phase::TurnOver => moves::switch_turn(&mut state),
                Phase::GameOver => break,
            }
        }

        prop_assert_eq!(engine_set(&state), mirror_set(&state));
    }
}
