//! Unit tests for move application and turn mechanics.

use crate::domain::moves::{self, Move, MoveFrom, MoveTo};
use crate::domain::state::{Phase, Player};
use crate::domain::test_state_helpers::{empty_state_with_dice, state_with_dice};
use crate::errors::domain::ValidationKind;

#[test]
fn opening_destinations_from_the_eight_point() {
    // Fresh game, White to move, dice [3,5]: the 3-stack on index 7 can
    // reach 4 and 2, both unoccupied in the classical layout.
    let state = state_with_dice(Player::White, &[3, 5]);
    let legal = state.legal_moves();

    assert!(legal.contains(&Move {
        from: MoveFrom::Point(7),
        to: MoveTo::Point(4),
        die: 3,
    }));
    assert!(legal.contains(&Move {
        from: MoveFrom::Point(7),
        to: MoveTo::Point(2),
        die: 5,
    }));
}

#[test]
fn blocked_point_cannot_be_landed_on() {
    // Black's five checkers on 18 block White's 23 → 18 with a 5.
    let mut state = state_with_dice(Player::White, &[5]);
    let blocked = Move {
        from: MoveFrom::Point(23),
        to: MoveTo::Point(18),
        die: 5,
    };

    assert!(!state.legal_moves().contains(&blocked));
    let err = moves::apply_move(&mut state, blocked).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn hitting_a_lone_checker_sends_it_to_the_bar() {
    let mut state = empty_state_with_dice(Player::White, &[2]);
    state.board.set_point(7, Player::White, 1);
    state.board.set_point(5, Player::Black, 1);

    let outcome = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(7),
            to: MoveTo::Point(5),
            die: 2,
        },
    )
    .unwrap();

    assert_eq!(outcome.hit, Some(Player::Black));
    assert_eq!(state.board.point(5).owner(), Some(Player::White));
    assert_eq!(state.board.point(5).count(), 1);
    assert_eq!(state.board.bar(Player::Black), 1);
}

#[test]
fn black_hit_on_point_five_raises_whites_bar() {
    // White has exactly one checker on point 5; Black lands on it.
    let mut state = empty_state_with_dice(Player::Black, &[3]);
    state.board.set_point(2, Player::Black, 1);
    state.board.set_point(5, Player::White, 1);

    moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(2),
            to: MoveTo::Point(5),
            die: 3,
        },
    )
    .unwrap();

    assert_eq!(state.board.bar(Player::White), 1);
    assert_eq!(state.board.point(5).owner(), Some(Player::Black));
    assert_eq!(state.board.point(5).count(), 1);
}

#[test]
fn success_consumes_exactly_one_matching_die() {
    let mut state = state_with_dice(Player::White, &[3, 5]);
    moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(7),
            to: MoveTo::Point(4),
            die: 3,
        },
    )
    .unwrap();
    assert_eq!(state.dice.remaining(), &[5]);

    let mut state = state_with_dice(Player::White, &[4, 4, 4, 4]);
    moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(23),
            to: MoveTo::Point(19),
            die: 4,
        },
    )
    .unwrap();
    assert_eq!(state.dice.remaining(), &[4, 4, 4]);
}

#[test]
fn failure_leaves_dice_and_board_untouched() {
    let mut state = state_with_dice(Player::White, &[3, 5]);
    let before = state.clone();

    let unavailable_die = Move {
        from: MoveFrom::Point(7),
        to: MoveTo::Point(1),
        die: 6,
    };
    assert!(moves::apply_move(&mut state, unavailable_die).is_err());
    assert_eq!(state, before);

    let wrong_target = Move {
        from: MoveFrom::Point(7),
        to: MoveTo::Point(3),
        die: 3,
    };
    assert!(moves::apply_move(&mut state, wrong_target).is_err());
    assert_eq!(state, before);
}

#[test]
fn source_must_be_owned_by_the_mover() {
    let mut state = state_with_dice(Player::White, &[3]);
    let from_opponent_stack = Move {
        from: MoveFrom::Point(11),
        to: MoveTo::Point(8),
        die: 3,
    };
    let err = moves::apply_move(&mut state, from_opponent_stack).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn moves_require_a_roll_first() {
    let mut state = state_with_dice(Player::White, &[]);
    assert_eq!(state.phase, Phase::AwaitingRoll);

    let err = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(7),
            to: MoveTo::Point(4),
            die: 3,
        },
    )
    .unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::IllegalMove));
}

#[test]
fn exhausted_dice_end_the_turn_and_switch_flips_the_player() {
    let mut state = state_with_dice(Player::White, &[3]);
    let outcome = moves::apply_move(
        &mut state,
        Move {
            from: MoveFrom::Point(7),
            to: MoveTo::Point(4),
            die: 3,
        },
    )
    .unwrap();

    assert!(outcome.dice_exhausted);
    assert_eq!(state.phase, Phase::TurnOver);

    moves::switch_turn(&mut state);
    assert_eq!(state.current_player, Player::Black);
    assert!(!state.dice.rolled());
    assert_eq!(state.phase, Phase::AwaitingRoll);
}

#[test]
fn conservation_holds_across_opening_moves() {
    let mut state = state_with_dice(Player::White, &[6, 1]);
    for mv in [
        Move {
            from: MoveFrom::Point(23),
            to: MoveTo::Point(17),
            die: 6,
        },
        Move {
            from: MoveFrom::Point(7),
            to: MoveTo::Point(6),
            die: 1,
        },
    ] {
        moves::apply_move(&mut state, mv).unwrap();
        assert!(state.board.is_conserved());
    }
}
