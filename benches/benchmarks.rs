use criterion::{criterion_group, criterion_main, Criterion};
use goban_strings::game::GameState;
use goban_strings::position::Position;
use goban_strings::r#move::Move;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

/// Driver-side move enumeration: every legal placement plus pass.
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

/// Play ~20 random placements on a fresh game to create a realistic
/// mid-game position. Uses a fixed seed for reproducibility across runs.
fn setup_midgame(size: u8) -> GameState {
    let mut state = GameState::new_game(size);
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let placements: Vec<_> = candidate_moves(&state)
            .into_iter()
            .filter(|m| m.is_play())
            .collect();
        let mv = match placements.choose(&mut rng) {
            Some(&mv) => mv,
            None => break,
        };
        state = state.apply_move(mv).expect("candidate moves are legal");
    }
    state
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_apply_move_9x9(c: &mut Criterion) {
    let state = setup_midgame(9);
    let mv = candidate_moves(&state)
        .into_iter()
        .find(|m| m.is_play())
        .expect("midgame board has open points");
    c.bench_function("apply_move_9x9", |b| {
        b.iter(|| black_box(state.apply_move(mv).expect("legal move applies")))
    });
}

fn bench_apply_move_19x19(c: &mut Criterion) {
    let state = setup_midgame(19);
    let mv = candidate_moves(&state)
        .into_iter()
        .find(|m| m.is_play())
        .expect("midgame board has open points");
    c.bench_function("apply_move_19x19", |b| {
        b.iter(|| black_box(state.apply_move(mv).expect("legal move applies")))
    });
}

fn bench_is_move_self_capture(c: &mut Criterion) {
    let state = setup_midgame(9);
    let mv = candidate_moves(&state)
        .into_iter()
        .find(|m| m.is_play())
        .expect("midgame board has open points");
    let player = state.next_player();
    c.bench_function("is_move_self_capture", |b| {
        b.iter(|| black_box(state.is_move_self_capture(player, mv)))
    });
}

fn bench_candidate_moves_9x9(c: &mut Criterion) {
    let state = setup_midgame(9);
    c.bench_function("candidate_moves_9x9", |b| {
        b.iter(|| black_box(candidate_moves(&state)))
    });
}

fn bench_candidate_moves_19x19(c: &mut Criterion) {
    let state = setup_midgame(19);
    c.bench_function("candidate_moves_19x19", |b| {
        b.iter(|| black_box(candidate_moves(&state)))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn bench_random_playout_9x9(c: &mut Criterion) {
    c.bench_function("random_playout_9x9", |b| {
        b.iter(|| {
            let mut state = GameState::new_game(9);
            let mut rng = StdRng::seed_from_u64(123);
            let mut moves_played = 0;
            while !state.is_over() && moves_played < 400 {
                let moves = candidate_moves(&state);
                let mv = match moves.choose(&mut rng) {
                    Some(&mv) => mv,
                    None => break,
                };
                state = state.apply_move(mv).expect("candidate moves are legal");
                moves_played += 1;
            }
            black_box(state)
        })
    });
}

fn bench_replay_from_history(c: &mut Criterion) {
    let state = setup_midgame(9);
    let moves = state.move_history();
    c.bench_function("replay_from_history", |b| {
        b.iter(|| {
            let mut replayed = GameState::new_game(9);
            for &mv in &moves {
                replayed = replayed.apply_move(mv).expect("recorded move replays");
            }
            black_box(replayed)
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move_9x9,
    bench_apply_move_19x19,
    bench_is_move_self_capture,
    bench_candidate_moves_9x9,
    bench_candidate_moves_19x19,
    bench_random_playout_9x9,
    bench_replay_from_history,
);
criterion_main!(benches);
