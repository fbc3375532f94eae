#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use nogo_mcts::{
    policy::simulation::{FixedOrderPolicy, SimulationPolicy},
    Board, MCTSConfig, NoGoBoard, MCTS,
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

// Midgame position with a handful of stones from both sides
fn midgame_board() -> NoGoBoard {
    let mut board = NoGoBoard::new();
    for cell in [40, 30, 50, 32, 48, 20, 60, 24, 56, 10] {
        board.place(cell);
    }
    board
}

fn bench_mcts_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_search");
    group.measurement_time(Duration::from_secs(10));

    // Full decisions on the empty board at typical budgets
    for &iter_count in &[100, 200, 500] {
        let config = MCTSConfig::default().with_max_iterations(iter_count);

        group.bench_with_input(
            BenchmarkId::new("empty_board", iter_count),
            &iter_count,
            |b, &_| {
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| {
                    let mut mcts = MCTS::new(NoGoBoard::new(), config.clone());
                    black_box(mcts.search(&mut rng))
                })
            },
        );
    }

    let midgame = midgame_board();
    let config = MCTSConfig::default().with_max_iterations(200);
    group.bench_function("midgame_board/200", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            let mut mcts = MCTS::new(midgame.clone(), config.clone());
            black_box(mcts.search(&mut rng))
        })
    });

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let policy = FixedOrderPolicy::new();
    let board = NoGoBoard::new();

    c.bench_function("fixed_order_playout", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| black_box(policy.simulate(&board, &mut rng)))
    });
}

criterion_group!(benches, bench_mcts_search, bench_playout);
criterion_main!(benches);
