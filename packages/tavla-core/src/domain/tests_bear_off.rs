//! Unit tests for bearing off and win detection.

use crate::domain::moves::{self, check_winner, Move, MoveFrom, MoveTo};
use crate::domain::rules;
use crate::domain::state::{Phase, Player};
use crate::domain::test_state_helpers::empty_state_with_dice;
use crate::errors::domain::ValidationKind;

#[test]
fn exact_die_bears_off_from_home() {
    let mut state = empty_state_with_dice(Player::White, &[3]);
    state.board.set_point(2, Player::White, 1);
    state.board.set_off(Player::White, 14);

    let outcome = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(2),
            to: MoveTo::Off,
            die: 3,
        },
    )
    .unwrap();

    assert!(outcome.borne_off);
    assert_eq!(state.board.off(Player::White), 15);
    assert!(state.board.point(2).is_empty());
}

#[test]
fn black_bears_off_toward_the_high_boundary() {
    let mut state = empty_state_with_dice(Player::Black, &[6]);
    state.board.set_point(18, Player::Black, 1);

    let legal = state.legal_moves();
    assert!(legal.contains(&Move {
        from: MoveFrom::Point(18),
        to: MoveTo::Off,
        die: 6,
    }));
}

#[test]
fn overshoot_past_the_boundary_is_not_a_bear_off() {
    // A 5 from index 2 lands past the boundary (-3), not exactly on it.
    let mut state = empty_state_with_dice(Player::White, &[5]);
    state.board.set_point(2, Player::White, 1);
    state.board.set_off(Player::White, 14);

    assert!(state.legal_moves().is_empty());
    let err = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(2),
            to: MoveTo::Off,
            die: 5,
        },
    )
    .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn bear_off_is_gated_on_all_checkers_home() {
    let mut state = empty_state_with_dice(Player::White, &[3]);
    state.board.set_point(2, Player::White, 1);
    state.board.set_point(10, Player::White, 1);

    assert!(!rules::can_bear_off(&state.board, Player::White));
    let err = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(2),
            to: MoveTo::Off,
            die: 3,
        },
    )
    .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn bear_off_is_gated_on_an_empty_bar() {
    let mut state = empty_state_with_dice(Player::White, &[3]);
    state.board.set_point(2, Player::White, 1);
    state.board.set_bar(Player::White, 1);

    assert!(!rules::can_bear_off(&state.board, Player::White));
    let err = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(2),
            to: MoveTo::Off,
            die: 3,
        },
    )
    .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn fifteenth_checker_off_wins_and_stays_won() {
    let mut state = empty_state_with_dice(Player::White, &[1]);
    state.board.set_point(0, Player::White, 1);
    state.board.set_off(Player::White, 14);

    let outcome = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(0),
            to: MoveTo::Off,
            die: 1,
        },
    )
    .unwrap();

    assert_eq!(outcome.winner, Some(Player::White));
    assert_eq!(state.winner, Some(Player::White));
    assert_eq!(state.phase, Phase::GameOver);

    // Idempotent regardless of further calls and rejected actions.
    assert_eq!(check_winner(&state.board), Some(Player::White));
    assert_eq!(check_winner(&state.board), Some(Player::White));
    assert!(state.legal_moves().is_empty());

    let err = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(0),
            to: MoveTo::Off,
            die: 1,
        },
    )
    .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
    assert_eq!(state.winner, Some(Player::White));
}

#[test]
fn switch_turn_does_not_resurrect_a_finished_game() {
    let mut state = empty_state_with_dice(Player::White, &[1]);
    state.board.set_point(0, Player::White, 1);
    state.board.set_off(Player::White, 14);
    moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(0),
            to: MoveTo::Off,
            die: 1,
        },
    )
    .unwrap();

    moves::switch_turn(&mut state);
    assert_eq!(state.phase, Phase::GameOver);
    assert_eq!(state.winner, Some(Player::White));
}
