use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::config::{ConfigError, LifeConfig, MAX_TICKS_PER_SECOND, MIN_TICKS_PER_SECOND};
use super::{Command, CommandError, Viewport};
use crate::domain::{Grid, LifeEngine, presets};

/// Simulation orchestrates the grid and its driving loop.
///
/// The engine stays pure; this struct holds the mutable parts a host loop
/// needs (running flag, cadence, generation count, viewport) and applies
/// commands to them synchronously.
pub struct Simulation {
    grid: Grid,
    engine: LifeEngine,
    rng: StdRng,
    density: f64,
    running: bool,
    generation: u64,
    ticks_per_second: f64,
    last_tick: Option<f64>,
    viewport: Viewport,
}

impl Simulation {
    pub fn new(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = match config.seed_on_start {
            true => Grid::random(config.rows, config.cols, config.density, &mut rng),
            false => Grid::new(config.rows, config.cols),
        };
        let grid = grid.map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let engine = LifeEngine::new(config.topology)
            .with_rule(config.rule)
            .with_parallel_threshold(config.parallel_threshold);
        let viewport = Viewport::centered(
            config.rows,
            config.cols,
            config.cell_size,
            config.canvas_width,
            config.canvas_height,
        );
        info!(
            rows = config.rows,
            cols = config.cols,
            topology = config.topology.name(),
            rule = %config.rule,
            "simulation created"
        );

        Ok(Self {
            grid,
            engine,
            rng,
            density: config.density,
            running: config.autostart,
            generation: 0,
            ticks_per_second: config.ticks_per_second,
            last_tick: None,
            viewport,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn ticks_per_second(&self) -> f64 {
        self.ticks_per_second
    }

    /// Minimum seconds between two generations
    pub fn tick_interval(&self) -> f64 {
        1.0 / self.ticks_per_second
    }

    /// Called from the host's frame callback with a monotonic time in
    /// seconds. Steps at most once and only if more than one interval has
    /// passed since the last step; early ticks are dropped, not queued.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return false;
        };
        if now - last <= self.tick_interval() {
            return false;
        }
        self.advance();
        self.last_tick = Some(now);
        true
    }

    fn advance(&mut self) {
        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
        debug!(generation = self.generation, population = self.grid.population(), "stepped");
    }

    /// Apply one command. Everything except an unknown pattern name
    /// succeeds; out-of-range edits are silent no-ops.
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        debug!(?command, "applying command");
        match command {
            Command::Start => self.set_running(true),
            Command::Stop => self.set_running(false),
            Command::ToggleRunning => self.set_running(!self.running),
            Command::Step => self.advance(),
            Command::Randomize => {
                // Density was validated with the config.
                if let Err(err) = self.grid.randomize(self.density, &mut self.rng) {
                    warn!(%err, "randomize skipped");
                }
                self.generation = 0;
                info!(population = self.grid.population(), "grid randomized");
            }
            Command::Reset => {
                self.set_running(false);
                self.grid.clear();
                self.generation = 0;
                info!("grid reset");
            }
            Command::Toggle { row, col } => {
                if !self.grid.toggle(row, col) {
                    debug!(row, col, "toggle outside grid ignored");
                }
            }
            Command::PlacePattern { name, row, col } => {
                let Some(pattern) = presets::by_name(&name) else {
                    warn!(%name, "unknown pattern");
                    return Err(CommandError::UnknownPattern(name));
                };
                let placed = self
                    .engine
                    .place_pattern_in_place(&mut self.grid, (row, col), &pattern);
                debug!(pattern = pattern.name, row, col, placed, "pattern placed");
            }
            Command::Pan { dx, dy } => self.viewport.pan(dx, dy),
            Command::Resize { width, height } => self.viewport.resize(width, height),
            Command::SetRate { ticks_per_second } => self.set_rate(ticks_per_second),
            Command::AdjustRate { delta } => self.set_rate(self.ticks_per_second + delta),
        }
        Ok(())
    }

    fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!(running, generation = self.generation, "run state changed");
        }
        self.running = running;
        // Restart the cadence so a resumed loop waits one full interval.
        self.last_tick = None;
    }

    fn set_rate(&mut self, ticks_per_second: f64) {
        if ticks_per_second.is_nan() {
            return;
        }
        self.ticks_per_second = ticks_per_second.clamp(MIN_TICKS_PER_SECOND, MAX_TICKS_PER_SECOND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Topology};

    fn config() -> LifeConfig {
        LifeConfig {
            rows: 10,
            cols: 10,
            rng_seed: Some(1),
            ticks_per_second: 10.0,
            ..LifeConfig::classic()
        }
    }

    fn blinker_sim() -> Simulation {
        let mut sim = Simulation::new(&config()).unwrap();
        for col in 3..6 {
            sim.apply(Command::Toggle { row: 4, col }).unwrap();
        }
        sim
    }

    #[test]
    fn test_stopped_simulation_never_steps() {
        let mut sim = blinker_sim();
        assert!(!sim.tick(0.0));
        assert!(!sim.tick(10.0));
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_first_tick_only_records_time() {
        let mut sim = blinker_sim();
        sim.apply(Command::Start).unwrap();
        assert!(!sim.tick(5.0));
        assert!(sim.tick(5.2));
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.grid().get(3, 4), Some(Cell::Alive));
    }

    #[test]
    fn test_early_ticks_are_dropped_not_queued() {
        let mut sim = blinker_sim();
        sim.apply(Command::Start).unwrap();
        sim.tick(0.0);
        assert!(!sim.tick(0.05));
        assert!(!sim.tick(0.1));
        assert!(sim.tick(0.15));
        // A long stall still yields a single generation.
        assert!(sim.tick(10.0));
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_reset_stops_and_clears() {
        let mut sim = blinker_sim();
        sim.apply(Command::Start).unwrap();
        sim.apply(Command::Step).unwrap();
        sim.apply(Command::Reset).unwrap();
        assert!(!sim.is_running());
        assert!(sim.grid().is_empty());
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_step_works_while_stopped() {
        let mut sim = blinker_sim();
        sim.apply(Command::Step).unwrap();
        sim.apply(Command::Step).unwrap();
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid().get(4, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = Simulation::new(&config()).unwrap();
        let mut b = Simulation::new(&config()).unwrap();
        a.apply(Command::Randomize).unwrap();
        b.apply(Command::Randomize).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert!(!a.grid().is_empty());
    }

    #[test]
    fn test_unknown_pattern_is_an_error() {
        let mut sim = Simulation::new(&config()).unwrap();
        assert_eq!(
            sim.apply(Command::PlacePattern { name: "spaceship".into(), row: 0, col: 0 }),
            Err(CommandError::UnknownPattern("spaceship".into()))
        );
        sim.apply(Command::PlacePattern { name: "glider".into(), row: 5, col: 5 })
            .unwrap();
        assert_eq!(sim.grid().population(), 5);
    }

    #[test]
    fn test_out_of_range_edits_are_noops() {
        let mut sim = Simulation::new(&config()).unwrap();
        sim.apply(Command::Toggle { row: 99, col: 0 }).unwrap();
        sim.apply(Command::PlacePattern { name: "block".into(), row: -40, col: 400 })
            .unwrap();
        assert!(sim.grid().is_empty());
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let config = LifeConfig {
            rows: usize::MAX / 2 + 1,
            cols: 2,
            ..config()
        };
        assert!(matches!(Simulation::new(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rate_is_clamped() {
        let mut sim = Simulation::new(&config()).unwrap();
        sim.apply(Command::SetRate { ticks_per_second: 500.0 }).unwrap();
        assert_eq!(sim.ticks_per_second(), MAX_TICKS_PER_SECOND);
        sim.apply(Command::AdjustRate { delta: -1000.0 }).unwrap();
        assert_eq!(sim.ticks_per_second(), MIN_TICKS_PER_SECOND);
    }

    #[test]
    fn test_toroidal_config_wraps_patterns() {
        let mut sim = Simulation::new(&LifeConfig {
            topology: Topology::Toroidal,
            ..config()
        })
        .unwrap();
        sim.apply(Command::PlacePattern { name: "block".into(), row: 9, col: 9 })
            .unwrap();
        assert_eq!(sim.grid().get(0, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_autostart_and_seed_on_start() {
        let sim = Simulation::new(&LifeConfig {
            seed_on_start: true,
            autostart: true,
            density: 1.0,
            ..config()
        })
        .unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.grid().population(), 100);
    }

    #[test]
    fn test_pan_goes_through_viewport() {
        let mut sim = Simulation::new(&LifeConfig {
            rows: 100,
            cols: 100,
            cell_size: 10.0,
            canvas_width: 200.0,
            canvas_height: 200.0,
            ..config()
        })
        .unwrap();
        assert_eq!(sim.viewport().offset(), (400.0, 400.0));
        sim.apply(Command::Pan { dx: 1000.0, dy: -1000.0 }).unwrap();
        assert_eq!(sim.viewport().offset(), (800.0, 0.0));
    }
}
