//! Benchmarks for the automated opponent's heuristic.
//!
//! # Benchmarks
//!
//! - **`forced_move_block`**: the human holds all but the last cell of the
//!   last column while the opponent's cells are scattered along the first
//!   row, so the win check fails and the block check has to scan every
//!   qualifying line.
//! - **`automated_game`**: plays a seeded match between two automated
//!   participants to the end.
//!
//! Both run on boards of side length 3, 9, 25 and 101.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench strategy
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use noughts_core::{Board, Position, Symbol};
use noughts_game::{FirstTurn, Match, MatchConfig, MatchSeed, OpponentStrategy, Participant};

const SIDE_LENGTHS: [usize; 4] = [3, 9, 25, 101];

const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

fn block_setup(n: usize) -> (Board, Vec<Position>, Vec<Position>) {
    let mut board = Board::new(n).unwrap();
    let human: Vec<_> = (0..n - 1).map(|row| Position::new(n - 1, row)).collect();
    let own: Vec<_> = (0..n - 1).step_by(2).map(|column| Position::new(column, 0)).collect();
    for &pos in &human {
        board.place(pos, Symbol::X);
    }
    for &pos in &own {
        board.place(pos, Symbol::O);
    }
    (board, own, human)
}

fn bench_forced_move_block(c: &mut Criterion) {
    for n in SIDE_LENGTHS {
        let (board, own, human) = block_setup(n);
        c.bench_with_input(BenchmarkId::new("forced_move_block", n), &n, |b, _| {
            b.iter(|| {
                OpponentStrategy::forced_move(
                    hint::black_box(&board),
                    hint::black_box(&own),
                    hint::black_box(&human),
                )
            });
        });
    }
}

fn bench_automated_game(c: &mut Criterion) {
    let seed: MatchSeed = SEED.parse().unwrap();
    for n in SIDE_LENGTHS {
        let config = MatchConfig::default()
            .side_length(n)
            .first_turn(FirstTurn::First);
        c.bench_with_input(BenchmarkId::new("automated_game", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    Match::with_seed(
                        config,
                        Participant::automated(Symbol::X, n),
                        Participant::automated(Symbol::O, n),
                        seed,
                    )
                    .unwrap()
                },
                |mut game| {
                    while !game.status().is_finished() {
                        game.play_automated_turn().unwrap();
                    }
                    game
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_forced_move_block,
        bench_automated_game
);
criterion_main!(benches);
