//! Mirror evaluator: client-side legality over snapshots.
//!
//! The presentation layer uses these to highlight destinations and detect
//! forced passes before the authoritative engine confirms anything. All
//! functions are stateless and reentrant; each call re-derives from the
//! snapshot it is given, and every rule comes from [`crate::domain::rules`],
//! the same module the engine consults, so the two sides cannot drift.
//!
//! The mirror is never the arbiter: on any disagreement the engine's
//! decision wins and callers must re-derive from the next snapshot.

use crate::domain::moves::{Move, MoveFrom, MoveTo};
use crate::domain::rules;
use crate::domain::snapshot::Snapshot;
use crate::domain::state::Player;

/// Full enumeration for the snapshot's current player. Used to detect
/// forced-pass conditions client-side; empty once the game is over.
pub fn all_legal_moves(snapshot: &Snapshot) -> Vec<Move> {
    if snapshot.winner.is_some() {
        return Vec::new();
    }
    rules::legal_moves(&snapshot.board(), snapshot.current_player, &snapshot.dice)
}

/// Destinations reachable from one origin, for drag-start highlighting.
pub fn legal_destinations_from(snapshot: &Snapshot, from: MoveFrom) -> Vec<MoveTo> {
    if snapshot.winner.is_some() {
        return Vec::new();
    }
    rules::legal_destinations_from(
        &snapshot.board(),
        snapshot.current_player,
        &snapshot.dice,
        from,
    )
}

/// Bearing-off eligibility as the engine would compute it.
pub fn can_bear_off(snapshot: &Snapshot, player: Player) -> bool {
    rules::can_bear_off(&snapshot.board(), player)
}
