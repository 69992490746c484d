//! Per-instance request boundary and turn-loop policy.
//!
//! [`GameFlow`] owns exactly one game. It validates each request, dispatches
//! to the pure domain operations, and advances the turn when dice are
//! exhausted or no legal move remains. The engine answers "are there legal
//! moves" and "apply this one"; this layer decides when the turn passes.
//!
//! Single-writer: every mutation takes `&mut self`, there are no locks and
//! no global state. The transport collaborator keeps one instance per room
//! and serializes requests to it, broadcasting each returned snapshot.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::domain::board::POINTS;
use crate::domain::dice::DiceRoller;
use crate::domain::moves::{self, Move, MoveFrom, MoveTo};
use crate::domain::snapshot::{snapshot, Snapshot};
use crate::domain::state::{GameState, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// Turn-loop notifications produced while handling a request. Forced passes
/// are reported explicitly, never as silent turn advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The roll produced no legal move; the turn passed without a move.
    ForcedPass { player: Player },
    /// The turn moved to `player`.
    TurnBecame { player: Player },
    /// A player bore off the 15th checker. Terminal.
    GameEnded { winner: Player },
}

/// Reply to a successful request: the fresh snapshot to broadcast plus the
/// events the presentation layer should surface.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReply {
    pub snapshot: Snapshot,
    pub events: Vec<TurnEvent>,
}

/// One game instance behind the request boundary.
#[derive(Debug)]
pub struct GameFlow {
    state: GameState,
    roller: DiceRoller,
}

impl GameFlow {
    pub fn new(config: GameConfig) -> Self {
        let roller = match config.rng_seed {
            Some(seed) => DiceRoller::seeded(seed),
            None => DiceRoller::from_entropy(),
        };
        Self {
            state: GameState::new(&config),
            roller,
        }
    }

    /// Rebuild a flow from a transmitted snapshot, e.g. when a room is
    /// rehydrated after a reconnect. The seed, if any, only affects dice
    /// rolled from here on.
    pub fn restore(snapshot: &Snapshot, config: GameConfig) -> Result<Self, DomainError> {
        let roller = match config.rng_seed {
            Some(seed) => DiceRoller::seeded(seed),
            None => DiceRoller::from_entropy(),
        };
        Ok(Self {
            state: snapshot.restore()?,
            roller,
        })
    }

    /// Immutable projection of the current state.
    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Roll the dice for `player`.
    ///
    /// The transport has already authenticated the caller as `player`; this
    /// double-checks that it is actually that player's turn.
    pub fn roll(&mut self, player: Player) -> Result<FlowReply, DomainError> {
        self.require_turn(player)?;

        let outcome = moves::roll_dice(&mut self.state, &mut self.roller)?;
        debug!(
            ?player,
            die1 = outcome.die1,
            die2 = outcome.die2,
            "dice rolled"
        );

        let mut events = Vec::new();
        if outcome.forced_pass {
            info!(?player, "no legal moves after roll, forced pass");
            events.push(TurnEvent::ForcedPass { player });
            moves::switch_turn(&mut self.state);
            events.push(TurnEvent::TurnBecame {
                player: self.state.current_player,
            });
        }

        Ok(self.reply(events))
    }

    /// Validate and apply a move for `player`.
    pub fn apply(&mut self, player: Player, mv: Move) -> Result<FlowReply, DomainError> {
        self.require_turn(player)?;
        validate_move(&mv)?;

        let outcome = moves::apply_move(&mut self.state, mv)?;
        debug!(?player, ?mv, hit = ?outcome.hit, "move applied");

        let mut events = Vec::new();
        if let Some(winner) = outcome.winner {
            info!(?winner, "game over");
            events.push(TurnEvent::GameEnded { winner });
        } else if outcome.dice_exhausted || outcome.no_moves_left {
            moves::switch_turn(&mut self.state);
            events.push(TurnEvent::TurnBecame {
                player: self.state.current_player,
            });
        }

        Ok(self.reply(events))
    }

    fn require_turn(&self, player: Player) -> Result<(), DomainError> {
        if player != self.state.current_player {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("it is not {player:?}'s turn"),
            ));
        }
        Ok(())
    }

    fn reply(&self, events: Vec<TurnEvent>) -> FlowReply {
        FlowReply {
            snapshot: self.snapshot(),
            events,
        }
    }
}

/// Shape/range checks on the raw move payload, before any rule evaluation.
pub fn validate_move(mv: &Move) -> Result<(), DomainError> {
    if !(1..=6).contains(&mv.die) {
        return Err(DomainError::validation(
            ValidationKind::MalformedRequest,
            format!("die must be in 1..=6, got {}", mv.die),
        ));
    }
    if let MoveFrom::Point(index) = mv.from {
        if index as usize >= POINTS {
            return Err(DomainError::validation(
                ValidationKind::MalformedRequest,
                format!("origin index out of 0..=23: {index}"),
            ));
        }
    }
    if let MoveTo::Point(index) = mv.to {
        if index as usize >= POINTS {
            return Err(DomainError::validation(
                ValidationKind::MalformedRequest,
                format!("destination index out of 0..=23: {index}"),
            ));
        }
    }
    Ok(())
}
