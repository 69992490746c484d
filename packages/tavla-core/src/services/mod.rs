//! Request orchestration above the pure domain.

pub mod game_flow;
