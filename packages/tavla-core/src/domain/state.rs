//! Live game state: players, turn phases, and the aggregate container.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::board::Board;
use crate::domain::dice::Dice;
use crate::domain::moves::Move;
use crate::domain::rules;

/// One of the two sides.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Movement direction along the point indices: White walks 23 toward 0,
    /// Black walks 0 toward 23.
    pub fn direction(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Index into per-player `[T; 2]` arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }
}

/// Turn lifecycle phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Current player must roll before anything else can happen.
    AwaitingRoll,
    /// Dice remain and at least one legal move exists.
    AwaitingMove,
    /// Dice exhausted, or none of the remaining dice yields a legal move;
    /// waiting for the turn switch.
    TurnOver,
    /// A player has borne off all 15 checkers. Terminal.
    GameOver,
}

/// Entire per-instance game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Where the current turn stands.
    pub phase: Phase,
    /// 24 points plus bar/off counters.
    pub board: Board,
    /// Remaining move distances for the current turn.
    pub dice: Dice,
    /// Player whose turn it is to act.
    pub current_player: Player,
    /// Set once a player bears off the 15th checker; never cleared.
    pub winner: Option<Player>,
}

impl GameState {
    /// Fresh game: classical starting layout, empty bar/off, empty dice,
    /// no winner, starting side from the config.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            phase: Phase::AwaitingRoll,
            board: Board::starting_position(),
            dice: Dice::empty(),
            current_player: config.starting_player,
            winner: None,
        }
    }

    /// Canonical legality enumeration over the live state. Empty while no
    /// dice remain, and always empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        rules::legal_moves(&self.board, self.current_player, self.dice.remaining())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
