use criterion::*;

use reversi_rules::test_utils::run_perft;
use reversi_rules::{Board, Location, Player};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_probe(c: &mut Criterion) {
    let board = Board::new();
    let loc = Location::from_coords(2, 3);

    c.bench_function("probe", |b| {
        b.iter(|| black_box(board).probe(black_box(loc), Player::Black))
    });
    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(board).legal_moves(Player::Black))
    });
}

criterion_group!(perft, criterion_perft, criterion_probe);
criterion_main!(perft);
