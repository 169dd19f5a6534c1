use anyhow::{Context, Result};
use macroquad::prelude::*;
use tracing::{error, info, warn};

use life_engine::{
    Command, LifeConfig, Renderer, Simulation, input,
    rendering::{self, CanvasRenderer},
    ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// First argument is a preset name or a JSON config path; `LIFE_SEED`
/// pins the RNG.
fn load_config() -> Result<LifeConfig> {
    let arg = std::env::args().nth(1);
    let mut config = LifeConfig::from_arg(arg.as_deref())
        .with_context(|| format!("loading config from {:?}", arg.as_deref().unwrap_or("classic")))?;
    if let Ok(seed) = std::env::var("LIFE_SEED") {
        config.rng_seed = Some(seed.parse().context("LIFE_SEED must be an unsigned integer")?);
    }
    config.canvas_width = ui::grid_area_width();
    config.canvas_height = ui::grid_area_height();
    Ok(config)
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = load_config()?;
    let mut sim = Simulation::new(&config)?;
    let mut renderer = CanvasRenderer::default();
    let mut drag = input::DragState::default();
    info!("Starting Game of Life window");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        let canvas = (ui::grid_area_width(), ui::grid_area_height());
        let mut commands = Vec::new();
        if sim.viewport().canvas_size() != canvas {
            commands.push(Command::Resize { width: canvas.0, height: canvas.1 });
        }
        commands.extend(input::poll(&sim, &mut drag, &buttons, mouse_pos));
        for command in commands {
            if let Err(err) = sim.apply(command) {
                warn!(%err, "command rejected");
            }
        }

        sim.tick(get_time());

        clear_background(BLACK);
        renderer.render(sim.grid(), sim.viewport());
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
