//! Mapping between the request boundary and wire messages.

use crate::domain::moves::Move;
use crate::domain::state::Player;
use crate::errors::error_code::ErrorCode;
use crate::services::game_flow::{FlowReply, GameFlow, TurnEvent};

use super::messages::{ClientMsg, ServerMsg};

/// Dispatch one decoded client message against a game instance.
///
/// Success yields the broadcast set: explicit notifications first, then the
/// fresh state. Failure yields a single error message and leaves the
/// instance untouched.
pub fn dispatch(flow: &mut GameFlow, player: Player, msg: &ClientMsg) -> Vec<ServerMsg> {
    let result = match msg {
        ClientMsg::Roll => flow.roll(player),
        ClientMsg::Move { from, to, die } => flow.apply(
            player,
            Move {
                from: *from,
                to: *to,
                die: *die,
            },
        ),
        ClientMsg::State => Ok(FlowReply {
            snapshot: flow.snapshot(),
            events: Vec::new(),
        }),
    };

    match result {
        Ok(reply) => {
            let mut out: Vec<ServerMsg> = reply
                .events
                .iter()
                .map(|event| match event {
                    TurnEvent::ForcedPass { player } => ServerMsg::ForcedPass { player: *player },
                    TurnEvent::TurnBecame { player } => ServerMsg::Turn { player: *player },
                    TurnEvent::GameEnded { winner } => ServerMsg::GameOver { winner: *winner },
                })
                .collect();
            out.push(ServerMsg::State {
                state: reply.snapshot,
            });
            out
        }
        Err(err) => vec![ServerMsg::Error {
            code: ErrorCode::from(&err),
            message: err.to_string(),
        }],
    }
}
