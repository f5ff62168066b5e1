use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use divide_game::{alphabeta, minimax, SearchStats};

const POSITIONS: [u64; 4] = [10_002, 12_000, 18_000, 19_998];

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("Search");

    for number in POSITIONS {
        g.bench_with_input(BenchmarkId::new("Minimax", number), &number, |b, &n| {
            b.iter(|| minimax(black_box(n), true, 5, &mut SearchStats::new()))
        });
        g.bench_with_input(BenchmarkId::new("Alpha-Beta", number), &number, |b, &n| {
            b.iter(|| alphabeta(black_box(n), true, i64::MIN, i64::MAX, 5, &mut SearchStats::new()))
        });
    }

    g.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
