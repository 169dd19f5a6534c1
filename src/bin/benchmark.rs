//! Serial vs parallel stepping on square grids of increasing size

use std::time::Instant;

use anyhow::Result;
use life_engine::domain::{Grid, LifeEngine, Topology};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark(engine: &LifeEngine, grid: &Grid, iterations: u32, parallel: bool) -> f64 {
    let mut grid = grid.clone();
    let start = Instant::now();
    for _ in 0..iterations {
        grid = if parallel {
            engine.step_parallel(&grid)
        } else {
            engine.step_serial(&grid)
        };
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<()> {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for topology in [Topology::Bounded, Topology::Toroidal] {
        let engine = LifeEngine::new(topology);
        println!("-- {} edges --", topology.name());
        println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
        println!("{:-<48}", "");

        for size in sizes {
            let grid = Grid::random(size, size, 0.3, &mut rng)?;
            let serial_ms = benchmark(&engine, &grid, iterations, false);
            let parallel_ms = benchmark(&engine, &grid, iterations, true);
            println!(
                "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms
            );
        }
        println!();
    }

    let cells = 2000 * 2000;
    let grid = Grid::random(2000, 2000, 0.3, &mut rng)?;
    let parallel_ms = benchmark(&LifeEngine::new(Topology::Toroidal), &grid, iterations, true);
    println!(
        "Throughput at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        cells as f64 / (parallel_ms / 1000.0) / 1_000_000.0
    );
    Ok(())
}
