//! Quick single-run benchmark for development iteration.

use std::time::Instant;

use midrank::Rank;
use midrank::Ranker;

fn main() {
    let ranker = Ranker::base62();

    println!("=== balanced_ranks() ===");
    for count in [1_000, 100_000, 1_000_000] {
        let start = Instant::now();
        let ranks = ranker.balanced_ranks(count).unwrap();
        let elapsed = start.elapsed();
        println!("  {} ranks, width {}: {:?}", count, ranks[0].len(), elapsed);
    }

    println!("\n=== first() ===");
    let iterations = 10_000;
    let mut front: Rank = ranker.only().unwrap();
    let start = Instant::now();
    for _ in 0..iterations {
        front = ranker.first(Some(front.as_str())).unwrap();
    }
    let elapsed = start.elapsed();
    println!("  {} iterations: {:?}", iterations, elapsed);
    println!("  per call: {:?}", elapsed / iterations as u32);
    println!("  final rank: {} chars", front.len());

    println!("\n=== between() at one point ===");
    let low = ranker.only().unwrap();
    let mut high = ranker.last(Some(low.as_str())).unwrap();
    let start = Instant::now();
    for _ in 0..iterations {
        high = ranker.between(Some(low.as_str()), Some(high.as_str())).unwrap();
    }
    let elapsed = start.elapsed();
    println!("  {} iterations: {:?}", iterations, elapsed);
    println!("  per call: {:?}", elapsed / iterations as u32);
    println!("  final rank: {} chars", high.len());
}
