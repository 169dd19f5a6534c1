mod cell;
mod engine;
mod grid;
mod patterns;
mod rules;
mod topology;

pub use cell::Cell;
pub use engine::{LifeEngine, DEFAULT_PARALLEL_THRESHOLD};
pub use grid::{Grid, GridError, Seed};
pub use patterns::{Pattern, presets};
pub use rules::{Rule, RuleError};
pub use topology::Topology;
