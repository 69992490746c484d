//! Domain layer: pure game rules, state, and projections.

pub mod board;
pub mod dice;
pub mod mirror;
pub mod moves;
mod moves_serde;
pub mod rules;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_bear_off;
#[cfg(test)]
mod tests_moves;
#[cfg(test)]
mod tests_props_parity;

// Re-exports for ergonomics
pub use board::{Board, Point, CHECKERS_PER_PLAYER, POINTS};
pub use dice::{Dice, DiceRoller};
pub use moves::{Move, MoveFrom, MoveOutcome, MoveTo, RollOutcome};
pub use snapshot::{snapshot, PointSnapshot, Snapshot};
pub use state::{GameState, Phase, Player};
