mod command;
pub mod config;
mod simulation;
mod viewport;

pub use command::{Command, CommandError};
pub use config::{ConfigError, LifeConfig};
pub use simulation::Simulation;
pub use viewport::{Viewport, VisibleCells};
