//! Benchmarks do gerador de lances, da avaliação e da busca.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use torre::engine::perft;
use torre::search::{evaluate_position, Engine, SearchConfig};
use torre::{Board, Color};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_legal_moves_starting(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(board.generate_legal_moves()))
    });
}

fn bench_legal_moves_middlegame(c: &mut Criterion) {
    let board = Board::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("legal_moves_middlegame", |b| {
        b.iter(|| black_box(board.generate_legal_moves()))
    });
}

fn bench_evaluate_position(c: &mut Criterion) {
    let board = Board::from_fen(MIDDLEGAME).unwrap();
    c.bench_function("evaluate_position_middlegame", |b| {
        b.iter(|| black_box(evaluate_position(&board, Color::White)))
    });
}

fn bench_perft_three(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("perft_3_starting_position", |b| b.iter(|| black_box(perft(&board, 3))));
}

fn bench_search_depth_three(c: &mut Criterion) {
    let board = Board::from_fen(MIDDLEGAME).unwrap();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("alpha_beta_depth_3", |b| {
        b.iter(|| {
            let mut engine = Engine::new(SearchConfig::with_difficulty(3));
            black_box(engine.best_move(&board))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves_starting,
    bench_legal_moves_middlegame,
    bench_evaluate_position,
    bench_perft_three,
    bench_search_depth_three,
);
criterion_main!(benches);
