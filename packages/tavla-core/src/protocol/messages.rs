//! Message payload schema.

use serde::{Deserialize, Serialize};

use crate::domain::moves::{MoveFrom, MoveTo};
use crate::domain::snapshot::Snapshot;
use crate::domain::state::Player;
use crate::errors::error_code::ErrorCode;

pub const PROTOCOL_VERSION: i32 = 1;

/// Requests a seated player may send once the transport has authenticated
/// them as the acting side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Roll the dice; no payload, faces are drawn engine-side.
    Roll,
    /// Move one checker:
    /// `{ "type": "move", from: 0..23 | "bar", to: 0..23 | "off", die: 1..6 }`.
    /// Bearing off reuses this shape with the `"off"` sentinel destination.
    Move { from: MoveFrom, to: MoveTo, die: u8 },
    /// Ask for a fresh state broadcast.
    State,
}

/// Replies and broadcasts produced by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// Full state after any successful mutation (or on request).
    State { state: Snapshot },
    /// `player` rolled dice that allow no legal move; their turn passed
    /// without a move.
    ForcedPass { player: Player },
    /// The turn moved to `player`.
    Turn { player: Player },
    /// The game ended.
    GameOver { winner: Player },
    /// Request rejected; engine state is unchanged.
    Error { code: ErrorCode, message: String },
}
