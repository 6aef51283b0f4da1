use coinchange::{decompose_greedy, decompose_optimal, Denominations};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AMOUNTS: [i64; 4] = [113, 1000, 5000, 10000];

fn bench_decomposers(c: &mut Criterion) {
    let coins = Denominations::canonical();
    let mut group = c.benchmark_group("coin_change");

    for &amount in AMOUNTS.iter() {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| decompose_greedy(black_box(amount), &coins))
        });
        group.bench_with_input(BenchmarkId::new("optimal", amount), &amount, |b, &amount| {
            b.iter(|| decompose_optimal(black_box(amount), &coins))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decomposers);
criterion_main!(benches);
