//! Offline mode driver: a full local game with no remote peer.
//!
//! Rolls, enumerates through the mirror, and applies a move for whichever
//! side is up, until one side bears off all 15 checkers. Pass a seed as the
//! first argument for a reproducible game.

use tavla_core::{
    logging, mirror, GameConfig, GameFlow, Move, MoveTo, Player, Snapshot, TurnEvent,
};

const MAX_HALF_TURNS: usize = 100_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let rng_seed: Option<u64> = std::env::args().nth(1).map(|arg| arg.parse()).transpose()?;
    let mut flow = GameFlow::new(GameConfig {
        rng_seed,
        ..GameConfig::default()
    });

    println!("=== game start ===");
    print_snapshot(&flow.snapshot());

    for _ in 0..MAX_HALF_TURNS {
        let player = flow.state().current_player;
        let reply = flow.roll(player)?;
        println!("\n{player:?} rolls, dice: {:?}", reply.snapshot.dice);

        if reply
            .events
            .iter()
            .any(|event| matches!(event, TurnEvent::ForcedPass { .. }))
        {
            println!("{player:?} has no legal move, turn passes");
            continue;
        }

        loop {
            let snapshot = flow.snapshot();
            let moves = mirror::all_legal_moves(&snapshot);
            let Some(mv) = choose_move(&moves) else {
                break;
            };
            let reply = flow.apply(player, mv)?;
            println!("{player:?} plays {mv:?}");

            if let Some(winner) = reply
                .events
                .iter()
                .find_map(|event| match event {
                    TurnEvent::GameEnded { winner } => Some(*winner),
                    _ => None,
                })
            {
                println!("\n=== {winner:?} wins ===");
                print_snapshot(&reply.snapshot);
                return Ok(());
            }
            if flow.state().current_player != player {
                break;
            }
        }
    }

    println!("\n=== aborted after {MAX_HALF_TURNS} half-turns ===");
    print_snapshot(&flow.snapshot());
    Ok(())
}

/// Prefer bearing off, otherwise take the first enumerated move.
fn choose_move(moves: &[Move]) -> Option<Move> {
    moves
        .iter()
        .find(|mv| matches!(mv.to, MoveTo::Off))
        .or_else(|| moves.first())
        .copied()
}

fn print_snapshot(snapshot: &Snapshot) {
    for point in snapshot.points.iter().rev() {
        if point.count > 0 {
            println!(
                "point {:2} -> {:5?} x{}",
                point.index,
                point.owner.unwrap_or(Player::White),
                point.count
            );
        }
    }
    println!(
        "bar W/B: {}/{}  off W/B: {}/{}  to move: {:?}",
        snapshot.white_bar,
        snapshot.black_bar,
        snapshot.white_off,
        snapshot.black_off,
        snapshot.current_player
    );
}
