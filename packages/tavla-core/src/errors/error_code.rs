//! Error codes surfaced on the wire.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in server messages. Add new codes here; never pass ad-hoc strings
//! as error codes.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Centralized error codes for rejected requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Move violates occupancy, direction, die-availability, or bear-off rules
    IllegalMove,
    /// Action attempted by the non-current player
    OutOfTurn,
    /// Roll requested while dice remain from the prior roll
    DiceAlreadyRolled,
    /// Payload failed shape/range validation
    MalformedRequest,
    /// Engine invariant broken; not recoverable at the request boundary
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IllegalMove => "ILLEGAL_MOVE",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::DiceAlreadyRolled => "DICE_ALREADY_ROLLED",
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::IllegalMove => ErrorCode::IllegalMove,
                ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                ValidationKind::DiceAlreadyRolled => ErrorCode::DiceAlreadyRolled,
                ValidationKind::MalformedRequest => ErrorCode::MalformedRequest,
            },
            DomainError::Invariant(_) => ErrorCode::Internal,
        }
    }
}
