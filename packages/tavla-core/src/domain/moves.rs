//! Move types and the operations that advance a turn.
//!
//! `apply_move` is the single point of board mutation: re-entries, normal
//! moves, and bear-offs all pass through it. Legality is checked by
//! membership in the shared enumeration from [`crate::domain::rules`], so
//! the engine accepts exactly the moves the mirror highlights.

use crate::domain::board::{Board, CHECKERS_PER_PLAYER};
use crate::domain::dice::DiceRoller;
use crate::domain::state::{GameState, Phase, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// Origin of a move: a board point or the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFrom {
    Bar,
    Point(u8),
}

/// Destination of a move: a board point or off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTo {
    Off,
    Point(u8),
}

/// One checker moved by one die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: MoveFrom,
    pub to: MoveTo,
    pub die: u8,
}

/// What a successful roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollOutcome {
    pub die1: u8,
    pub die2: u8,
    /// No remaining die yields a legal move; the turn must pass without a
    /// move being applied.
    pub forced_pass: bool,
}

/// What a successful move changed, for the caller's turn-loop policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Opponent whose lone checker was sent to the bar, if the move was a
    /// hit.
    pub hit: Option<Player>,
    /// The move bore a checker off.
    pub borne_off: bool,
    /// No dice remain after this move.
    pub dice_exhausted: bool,
    /// Dice remain, but none of them yields a legal move.
    pub no_moves_left: bool,
    /// Winner, if this move bore off the 15th checker.
    pub winner: Option<Player>,
}

/// Roll the dice for the current turn.
///
/// Precondition: the previous roll must be exhausted; a roll on a non-empty
/// pool is rejected without touching state. On success the pool holds two
/// distinct values, or four copies for a double, and the phase reflects
/// whether any legal move exists.
pub fn roll_dice(
    state: &mut GameState,
    roller: &mut DiceRoller,
) -> Result<RollOutcome, DomainError> {
    match state.phase {
        Phase::AwaitingRoll => {}
        Phase::AwaitingMove => {
            return Err(DomainError::validation(
                ValidationKind::DiceAlreadyRolled,
                "dice from the previous roll are not exhausted",
            ));
        }
        Phase::TurnOver => {
            return Err(DomainError::validation(
                ValidationKind::IllegalMove,
                "turn is over; waiting for the turn switch",
            ));
        }
        Phase::GameOver => {
            return Err(DomainError::validation(
                ValidationKind::IllegalMove,
                "game is over",
            ));
        }
    }

    let (die1, die2) = roller.roll();
    state.dice.fill(die1, die2);

    let forced_pass = state.legal_moves().is_empty();
    state.phase = if forced_pass {
        Phase::TurnOver
    } else {
        Phase::AwaitingMove
    };

    Ok(RollOutcome {
        die1,
        die2,
        forced_pass,
    })
}

/// Validate and apply one move for the current player.
///
/// Rejections leave the state untouched. On success the source is
/// decremented (ownership cleared at zero), a lone opposing checker on the
/// destination is hit to the bar, the destination is claimed or the off
/// counter incremented, and exactly one matching die is consumed.
pub fn apply_move(state: &mut GameState, mv: Move) -> Result<MoveOutcome, DomainError> {
    match state.phase {
        Phase::AwaitingMove => {}
        Phase::AwaitingRoll => {
            return Err(DomainError::validation(
                ValidationKind::IllegalMove,
                "dice have not been rolled",
            ));
        }
        Phase::TurnOver => {
            return Err(DomainError::validation(
                ValidationKind::IllegalMove,
                "no legal moves remain; turn must pass",
            ));
        }
        Phase::GameOver => {
            return Err(DomainError::validation(
                ValidationKind::IllegalMove,
                "game is over",
            ));
        }
    }

    if !state.dice.contains(mv.die) {
        return Err(DomainError::validation(
            ValidationKind::IllegalMove,
            format!("die {} is not among the remaining dice", mv.die),
        ));
    }

    // Membership in the shared enumeration is the legality check. The
    // mirror evaluator runs the same enumeration over snapshots, so both
    // sides agree by construction.
    if !state.legal_moves().contains(&mv) {
        return Err(DomainError::validation(
            ValidationKind::IllegalMove,
            format!("move {mv:?} is not legal in the current position"),
        ));
    }

    let player = state.current_player;
    let totals_before = (
        state.board.checker_total(Player::White),
        state.board.checker_total(Player::Black),
    );

    match mv.from {
        MoveFrom::Bar => state.board.pop_from_bar(player)?,
        MoveFrom::Point(from) => state.board.remove_checker(from as usize, player)?,
    }

    let mut hit = None;
    match mv.to {
        MoveTo::Off => state.board.bear_off(player),
        MoveTo::Point(to) => {
            let to = to as usize;
            if state.board.point(to).owner() == Some(player.opponent()) {
                // The enumeration guarantees the stack holds exactly one
                // opposing checker here.
                state.board.remove_checker(to, player.opponent())?;
                state.board.push_to_bar(player.opponent());
                hit = Some(player.opponent());
            }
            state.board.add_checker(to, player)?;
        }
    }

    state.dice.consume(mv.die)?;

    let totals_after = (
        state.board.checker_total(Player::White),
        state.board.checker_total(Player::Black),
    );
    if totals_before != totals_after {
        return Err(DomainError::invariant(
            "checker conservation broken by move application",
        ));
    }

    let winner = check_winner(&state.board);
    state.winner = winner;

    let dice_exhausted = !state.dice.rolled();
    let no_moves_left = winner.is_none() && !dice_exhausted && state.legal_moves().is_empty();

    state.phase = if winner.is_some() {
        Phase::GameOver
    } else if dice_exhausted || no_moves_left {
        Phase::TurnOver
    } else {
        Phase::AwaitingMove
    };

    Ok(MoveOutcome {
        hit,
        borne_off: matches!(mv.to, MoveTo::Off),
        dice_exhausted,
        no_moves_left,
        winner,
    })
}

/// Flip the current player and clear the remaining dice.
///
/// The surrounding game loop invokes this when dice are exhausted or no
/// legal move remains; the engine itself never decides when to pass. A
/// finished game stays finished.
pub fn switch_turn(state: &mut GameState) {
    state.current_player = state.current_player.opponent();
    state.dice.clear();
    if state.phase != Phase::GameOver {
        state.phase = Phase::AwaitingRoll;
    }
}

/// Winner is purely a function of the off counters; idempotent.
pub fn check_winner(board: &Board) -> Option<Player> {
    if board.off(Player::White) == CHECKERS_PER_PLAYER {
        Some(Player::White)
    } else if board.off(Player::Black) == CHECKERS_PER_PLAYER {
        Some(Player::Black)
    } else {
        None
    }
}
