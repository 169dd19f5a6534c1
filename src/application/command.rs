use thiserror::Error;

/// One discrete user action. The host turns input events into these and
/// hands them to `Simulation::apply` between ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Start,
    Stop,
    ToggleRunning,
    /// Advance exactly one generation, running or not
    Step,
    /// Reseed the grid at the configured density
    Randomize,
    /// Stop and clear the grid
    Reset,
    Toggle { row: usize, col: usize },
    PlacePattern { name: String, row: isize, col: isize },
    /// Shift the viewport by a pixel delta
    Pan { dx: f32, dy: f32 },
    /// Canvas size changed
    Resize { width: f32, height: f32 },
    SetRate { ticks_per_second: f64 },
    AdjustRate { delta: f64 },
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}
