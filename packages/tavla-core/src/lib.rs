#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod protocol;
pub mod services;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::board::{Board, Point, CHECKERS_PER_PLAYER, POINTS};
pub use domain::dice::{Dice, DiceRoller};
pub use domain::mirror;
pub use domain::moves::{
    apply_move, check_winner, roll_dice, switch_turn, Move, MoveFrom, MoveOutcome, MoveTo,
    RollOutcome,
};
pub use domain::snapshot::{snapshot, PointSnapshot, Snapshot};
pub use domain::state::{GameState, Phase, Player};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use protocol::{dispatch, ClientMsg, ServerMsg, PROTOCOL_VERSION};
pub use services::game_flow::{validate_move, FlowReply, GameFlow, TurnEvent};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    logging::init();
}
