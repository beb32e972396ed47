// Criterion benchmarks for rank generation
//
// Covers the three ways callers produce ranks:
// - seeding a list with balanced ranks
// - appending after the last element
// - inserting at random positions in a growing list

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use midrank::{Alphabet, CharacterSpace, Rank, Ranker};

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Append `count` ranks, each after the previous one.
fn append<S: CharacterSpace>(ranker: &Ranker<S>, count: usize) -> Vec<Rank> {
    let mut ranks: Vec<Rank> = Vec::with_capacity(count);
    for _ in 0..count {
        let before = ranks.last().map(|r| r.as_str());
        let rank = ranker.last(before).unwrap();
        ranks.push(rank);
    }
    return ranks;
}

/// Insert `count` ranks at seeded random positions.
fn random_inserts(ranker: &Ranker, count: usize, seed: u64) -> Vec<Rank> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ranks: Vec<Rank> = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = rng.gen_range(0..=ranks.len());
        let before = pos.checked_sub(1).map(|i| ranks[i].as_str());
        let after = ranks.get(pos).map(|r| r.as_str());
        let rank = ranker.between(before, after).unwrap();
        ranks.insert(pos, rank);
    }
    return ranks;
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("balanced_ranks");
    let ranker = Ranker::base62();

    for size in [100usize, 10_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("Base62", size), &size, |b, &size| {
            b.iter(|| black_box(ranker.balanced_ranks(size).unwrap().len()));
        });
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    let base62 = Ranker::base62();
    let table = Ranker::new(Alphabet::base62());

    for size in [100usize, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("Base62", size), &size, |b, &size| {
            b.iter(|| black_box(append(&base62, size).len()));
        });
        group.bench_with_input(BenchmarkId::new("Alphabet", size), &size, |b, &size| {
            b.iter(|| black_box(append(&table, size).len()));
        });
    }

    group.finish();
}

fn bench_random_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_inserts");
    let ranker = Ranker::base62();

    for size in [100usize, 1000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("Base62", size), &size, |b, &size| {
            b.iter(|| black_box(random_inserts(&ranker, size, 42).len()));
        });
    }

    group.finish();
}

fn bench_same_point(c: &mut Criterion) {
    let ranker = Ranker::base62();
    let low = ranker.only().unwrap();
    let high = ranker.last(Some(low.as_str())).unwrap();

    c.bench_function("same_point_1000", |b| {
        b.iter(|| {
            let mut high = high.clone();
            for _ in 0..1000 {
                high = ranker.between(Some(low.as_str()), Some(high.as_str())).unwrap();
            }
            black_box(high.len())
        });
    });
}

criterion_group!(
    benches,
    bench_balanced,
    bench_append,
    bench_random_inserts,
    bench_same_point,
);
criterion_main!(benches);
