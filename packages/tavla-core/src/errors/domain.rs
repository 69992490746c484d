//! Domain-level error type used across the engine, mirror, and protocol glue.
//!
//! Everything in the `Validation` taxonomy is recoverable at the request
//! boundary: game state is left untouched and the caller re-prompts.
//! `Invariant` means the engine itself is broken and must not be handled as
//! if it were bad input.

use thiserror::Error;

/// Reasons a request is rejected without mutating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// Move violates occupancy, direction, die-availability, or bear-off
    /// eligibility rules.
    IllegalMove,
    /// Move or roll attempted by the non-current player.
    OutOfTurn,
    /// Roll requested while dice remain from the prior roll.
    DiceAlreadyRolled,
    /// Payload failed shape/range validation before any rule evaluation.
    MalformedRequest,
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or rule violation; recoverable, state unchanged.
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Internal invariant broken (e.g. checker conservation); engine bug.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Kind tag for mapping to a wire error code, if this is a validation
    /// rejection.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
