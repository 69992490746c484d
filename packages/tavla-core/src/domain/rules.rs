//! Shared legality rules.
//!
//! Every predicate here is pure over a board value, so the authoritative
//! engine and the mirror evaluator run exactly the same code. A rule change
//! lands in both automatically; there is no second copy to drift.

use std::ops::RangeInclusive;

use crate::domain::board::{Board, POINTS};
use crate::domain::moves::{Move, MoveFrom, MoveTo};
use crate::domain::state::Player;

/// Home quadrant: the six points a player must gather all checkers in
/// before bearing off.
pub fn home_range(player: Player) -> RangeInclusive<usize> {
    match player {
        Player::White => 0..=5,
        Player::Black => 18..=23,
    }
}

/// Re-entry point from the bar for a die value.
pub fn entry_point(player: Player, die: u8) -> usize {
    match player {
        Player::White => POINTS - die as usize, // 1 → 23, 6 → 18
        Player::Black => die as usize - 1,      // 1 → 0, 6 → 5
    }
}

/// Occupancy rule: a point can be landed on when it is empty, already owned
/// by the mover, or holds exactly one opposing checker (a hit).
pub fn can_land_on(board: &Board, player: Player, index: usize) -> bool {
    let point = board.point(index);
    match point.owner() {
        None => true,
        Some(owner) if owner == player => true,
        Some(_) => point.count() == 1,
    }
}

/// Bearing off is allowed once the bar is empty and every checker sits
/// inside the home quadrant. Recomputed on every check; board state changes
/// after each move within a turn.
pub fn can_bear_off(board: &Board, player: Player) -> bool {
    if board.bar(player) > 0 {
        return false;
    }
    let home = home_range(player);
    (0..POINTS)
        .filter(|index| !home.contains(index))
        .all(|index| board.point(index).owner() != Some(player))
}

/// A bear-off target is exactly one past the last home point in the
/// player's movement direction.
fn is_bear_off_target(player: Player, target: i32) -> bool {
    match player {
        Player::White => target == -1,
        Player::Black => target == POINTS as i32,
    }
}

/// Die values that matter for enumeration: each distance once, even under a
/// double. Values outside 1..=6 have no board meaning and are dropped.
fn unique_dice(dice: &[u8]) -> Vec<u8> {
    let mut unique: Vec<u8> = dice
        .iter()
        .copied()
        .filter(|die| (1..=6).contains(die))
        .collect();
    unique.sort_unstable();
    unique.dedup();
    unique
}

/// Canonical legal-move enumeration. An empty result is a forced pass.
///
/// Checkers on the bar take absolute priority: while any remain, only
/// re-entry moves are produced. Otherwise every owned point is paired with
/// every unique die value; in-range targets follow the occupancy rule, and
/// out-of-range targets are bear-off moves when eligibility holds and the
/// overshoot lands exactly on the boundary.
pub fn legal_moves(board: &Board, player: Player, dice: &[u8]) -> Vec<Move> {
    let unique = unique_dice(dice);
    let mut moves = Vec::new();

    if board.bar(player) > 0 {
        for &die in &unique {
            let target = entry_point(player, die);
            if can_land_on(board, player, target) {
                moves.push(Move {
                    from: MoveFrom::Bar,
                    to: MoveTo::Point(target as u8),
                    die,
                });
            }
        }
        return moves;
    }

    let can_off = can_bear_off(board, player);
    for from in 0..POINTS {
        if board.point(from).owner() != Some(player) {
            continue;
        }
        for &die in &unique {
            let target = from as i32 + i32::from(die) * i32::from(player.direction());
            if (0..POINTS as i32).contains(&target) {
                if can_land_on(board, player, target as usize) {
                    moves.push(Move {
                        from: MoveFrom::Point(from as u8),
                        to: MoveTo::Point(target as u8),
                        die,
                    });
                }
            } else if can_off && is_bear_off_target(player, target) {
                moves.push(Move {
                    from: MoveFrom::Point(from as u8),
                    to: MoveTo::Off,
                    die,
                });
            }
        }
    }
    moves
}

/// Destinations reachable from one origin, for drag-start highlighting.
/// Filters the canonical enumeration, so bar priority and every other rule
/// apply unchanged.
pub fn legal_destinations_from(
    board: &Board,
    player: Player,
    dice: &[u8],
    from: MoveFrom,
) -> Vec<MoveTo> {
    legal_moves(board, player, dice)
        .into_iter()
        .filter(|mv| mv.from == from)
        .map(|mv| mv.to)
        .collect()
}
