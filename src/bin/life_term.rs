//! Headless runner printing text frames.
//!
//! Usage: `life_term [preset|config.json] [generations]`

use anyhow::{Context, Result};
use life_engine::rendering::TextRenderer;
use life_engine::{Command, LifeConfig, Renderer, Simulation, Viewport};
use tracing::info;

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let mut args = std::env::args().skip(1);
    let config = LifeConfig::from_arg(args.next().as_deref())?;
    let generations: u64 = match args.next() {
        Some(raw) => raw.parse().context("generations must be an unsigned integer")?,
        None => 10,
    };

    let mut sim = Simulation::new(&config)?;
    if sim.grid().is_empty() {
        sim.apply(Command::Randomize)?;
    }

    // One character per cell, clipped to an 80x40 window from the top-left.
    let (rows, cols) = sim.grid().dimensions();
    let viewport = Viewport::new(rows, cols, 1.0, 80.0, 40.0);
    let mut renderer = TextRenderer::new();

    info!(generations, "running headless");
    loop {
        renderer.render(sim.grid(), &viewport);
        println!("generation {} (alive {})", sim.generation(), sim.grid().population());
        println!("{}", renderer.frame());
        if sim.generation() >= generations {
            break;
        }
        sim.apply(Command::Step)?;
    }
    Ok(())
}
