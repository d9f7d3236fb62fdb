//! Seeded random self-play against the public driver surface, for profiling
//! placement and capture bookkeeping (`--features hotpath` for timings).

use std::time::Instant;

use goban_strings::game::GameState;
use goban_strings::position::Position;
use goban_strings::r#move::Move;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Move generation lives with the driver, not the library: enumerate every
/// empty, non-self-capture point plus pass, exactly as an external caller
/// would.
fn candidate_moves(state: &GameState) -> Vec<Move> {
    let board = state.board();
    let mut moves = Vec::new();
    for row in 1..=board.num_rows() {
        for col in 1..=board.num_cols() {
            let mv = Move::play(Position::new(row, col));
            if state.is_legal_move(mv) {
                moves.push(mv);
            }
        }
    }
    moves.push(Move::pass());
    moves
}

fn random_playout(rng: &mut StdRng, size: u8, max_moves: usize) -> usize {
    let mut state = GameState::new_game(size);
    let mut moves_played = 0;
    while !state.is_over() && moves_played < max_moves {
        let moves = candidate_moves(&state);
        let mv = match moves.choose(rng) {
            Some(&mv) => mv,
            None => break,
        };
        state = state.apply_move(mv).expect("candidate moves are legal");
        moves_played += 1;
    }
    moves_played
}

#[cfg_attr(feature = "hotpath", hotpath::main)]
fn main() {
    let games = 200;
    let mut rng = StdRng::seed_from_u64(42);

    let start = Instant::now();
    let mut total_moves = 0;
    for _ in 0..games {
        total_moves += random_playout(&mut rng, 9, 400);
    }
    let elapsed = start.elapsed();

    println!(
        "{} playouts, {} moves in {:.2?} ({:.0} moves/s)",
        games,
        total_moves,
        elapsed,
        total_moves as f64 / elapsed.as_secs_f64()
    );
}
