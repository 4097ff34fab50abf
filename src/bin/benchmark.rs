//! Performance benchmark comparing the sequential and parallel engines

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_life::domain::{Algorithm, CellPos, CellSpace};

/// Random soup of roughly `population` cells at ~30% density
fn soup(population: usize, rng: &mut StdRng) -> CellSpace {
    let side = ((population as f64 / 0.3).sqrt().ceil() as i64).max(1);
    (0..side)
        .flat_map(|row| (0..side).map(move |col| CellPos::new(row, col)))
        .filter(|_| rng.random_bool(0.3))
        .collect()
}

fn benchmark(algorithm: Algorithm, start: &CellSpace, iterations: u32) -> f64 {
    let mut cells = start.clone();
    let timer = Instant::now();
    for _ in 0..iterations {
        cells = algorithm.step(&cells);
    }
    timer.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Engine Benchmark ===\n");

    let populations = [100, 1_000, 10_000, 100_000, 500_000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>12} {:>14} {:>14} {:>10}", "Population", "Sparse ms", "Sparse+Par ms", "Speedup");
    println!("{:-<54}", "");

    for population in populations {
        let start = soup(population, &mut rng);
        let sequential_ms = benchmark(Algorithm::Sequential, &start, iterations);
        let parallel_ms = benchmark(Algorithm::Parallel, &start, iterations);

        println!(
            "{:>12} {:>14.3} {:>14.3} {:>9.1}x",
            start.population(),
            sequential_ms,
            parallel_ms,
            sequential_ms / parallel_ms
        );
    }
}
