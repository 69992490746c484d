//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots are full copies: the engine exclusively owns and mutates live
//! [`GameState`], every other component only ever reads snapshots. A
//! consumer holding an older snapshot is never confused by a newer one,
//! since nothing is mutated in place.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, POINTS};
use crate::domain::dice::Dice;
use crate::domain::rules;
use crate::domain::state::{GameState, Phase, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// Public info about a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub index: u8,
    pub owner: Option<Player>,
    pub count: u8,
}

/// Immutable projection of one game instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub points: [PointSnapshot; POINTS],
    pub white_bar: u8,
    pub black_bar: u8,
    pub white_off: u8,
    pub black_off: u8,
    /// Remaining die values for the current turn (0 to 4 entries).
    pub dice: Vec<u8>,
    pub current_player: Player,
    pub winner: Option<Player>,
}

/// Entry point: produce a snapshot of the current game state.
pub fn snapshot(state: &GameState) -> Snapshot {
    let mut points = [PointSnapshot {
        index: 0,
        owner: None,
        count: 0,
    }; POINTS];
    for (index, slot) in points.iter_mut().enumerate() {
        let point = state.board.point(index);
        *slot = PointSnapshot {
            index: index as u8,
            owner: point.owner(),
            count: point.count(),
        };
    }

    Snapshot {
        points,
        white_bar: state.board.bar(Player::White),
        black_bar: state.board.bar(Player::Black),
        white_off: state.board.off(Player::White),
        black_off: state.board.off(Player::Black),
        dice: state.dice.remaining().to_vec(),
        current_player: state.current_player,
        winner: state.winner,
    }
}

impl Snapshot {
    /// Shape/range validation for snapshots received over the wire,
    /// performed before any rule evaluation.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (index, point) in self.points.iter().enumerate() {
            if point.index as usize != index {
                return Err(DomainError::validation(
                    ValidationKind::MalformedRequest,
                    "points must be ordered by index",
                ));
            }
            if (point.count == 0) != point.owner.is_none() {
                return Err(DomainError::validation(
                    ValidationKind::MalformedRequest,
                    format!("point {index} has inconsistent owner/count"),
                ));
            }
        }
        if self.dice.len() > 4 {
            return Err(DomainError::validation(
                ValidationKind::MalformedRequest,
                "more than four remaining dice",
            ));
        }
        if self.dice.iter().any(|die| !(1..=6).contains(die)) {
            return Err(DomainError::validation(
                ValidationKind::MalformedRequest,
                "die value out of 1..=6",
            ));
        }
        Ok(())
    }

    /// Rebuild the board value, so rule evaluation over this snapshot runs
    /// the same code the engine runs on live state.
    pub(crate) fn board(&self) -> Board {
        let mut board = Board::empty();
        // Array position is authoritative; `validate` enforces that the
        // embedded indices agree with it.
        for (index, point) in self.points.iter().enumerate() {
            if let Some(owner) = point.owner {
                board.set_point(index, owner, point.count);
            }
        }
        board.set_bar(Player::White, self.white_bar);
        board.set_bar(Player::Black, self.black_bar);
        board.set_off(Player::White, self.white_off);
        board.set_off(Player::Black, self.black_off);
        board
    }

    /// Reconstruct a live state from this snapshot, e.g. to continue a game
    /// locally from a received position. The phase is re-derived from the
    /// snapshot's facts.
    pub fn restore(&self) -> Result<GameState, DomainError> {
        self.validate()?;
        let board = self.board();
        let dice = Dice::from_remaining(&self.dice);

        let phase = if self.winner.is_some() {
            Phase::GameOver
        } else if !dice.rolled() {
            Phase::AwaitingRoll
        } else if rules::legal_moves(&board, self.current_player, dice.remaining()).is_empty() {
            Phase::TurnOver
        } else {
            Phase::AwaitingMove
        };

        Ok(GameState {
            phase,
            board,
            dice,
            current_player: self.current_player,
            winner: self.winner,
        })
    }
}
