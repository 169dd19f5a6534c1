// Domain layer - grid, rules, patterns and the stepping engine
pub mod domain;

// Application layer - simulation driver, viewport, config, commands
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Command, LifeConfig, Simulation, Viewport};
pub use domain::{Cell, Grid, LifeEngine, Pattern, Rule, Topology, presets};
pub use rendering::Renderer;
