use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::{DEFAULT_PARALLEL_THRESHOLD, Rule, Topology};

/// Slowest and fastest tick rates accepted at runtime
pub const MIN_TICKS_PER_SECOND: f64 = 1.0;
pub const MAX_TICKS_PER_SECOND: f64 = 60.0;
/// Largest grid a config may ask for (8192 x 8192)
pub const MAX_CELLS: usize = 1 << 26;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown preset {0:?}, expected \"classic\" or \"canvas\"")]
    UnknownPreset(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Everything needed to build a `Simulation`.
///
/// Missing JSON fields fall back to the `classic` preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub topology: Topology,
    pub rule: Rule,
    /// Probability of a live cell when randomizing
    pub density: f64,
    /// Randomize the grid at startup instead of starting empty
    pub seed_on_start: bool,
    /// Fixed RNG seed; fresh entropy when absent
    pub rng_seed: Option<u64>,
    /// Start stepping immediately
    pub autostart: bool,
    pub ticks_per_second: f64,
    /// Cell edge in pixels
    pub cell_size: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Grids at least this large step on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl LifeConfig {
    /// Small 30x30 board with clipped edges, stepped every 300 ms
    pub fn classic() -> Self {
        Self {
            rows: 30,
            cols: 30,
            topology: Topology::Bounded,
            rule: Rule::CONWAY,
            density: 0.3,
            seed_on_start: false,
            rng_seed: None,
            autostart: false,
            ticks_per_second: 1000.0 / 300.0,
            cell_size: 20.0,
            canvas_width: 600.0,
            canvas_height: 600.0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// 5000px wrapped world behind a scrollable canvas, 10 generations/s
    pub fn canvas() -> Self {
        Self {
            rows: 500,
            cols: 500,
            topology: Topology::Toroidal,
            seed_on_start: true,
            autostart: true,
            ticks_per_second: 10.0,
            cell_size: 10.0,
            canvas_width: 820.0,
            canvas_height: 800.0,
            ..Self::classic()
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "canvas" => Ok(Self::canvas()),
            _ => Err(ConfigError::UnknownPreset(name.to_owned())),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), rows = config.rows, cols = config.cols, "loaded config");
        Ok(config)
    }

    /// Interpret a command-line argument as a preset name, or else a path
    /// to a JSON file. No argument means `classic`.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ConfigError> {
        match arg {
            None => Ok(Self::classic()),
            Some(arg) => match Self::preset(arg) {
                Ok(config) => Ok(config),
                Err(ConfigError::UnknownPreset(_)) if Path::new(arg).exists() => Self::load(arg),
                Err(err) => Err(err),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.rows == 0 || self.cols == 0 {
            return invalid(format!("grid must be at least 1x1, got {}x{}", self.rows, self.cols));
        }
        if self.rows.checked_mul(self.cols).is_none_or(|cells| cells > MAX_CELLS) {
            return invalid(format!(
                "grid {}x{} exceeds {MAX_CELLS} cells",
                self.rows, self.cols
            ));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return invalid(format!("density {} outside 0.0..=1.0", self.density));
        }
        if !(MIN_TICKS_PER_SECOND..=MAX_TICKS_PER_SECOND).contains(&self.ticks_per_second) {
            return invalid(format!(
                "ticks_per_second {} outside {MIN_TICKS_PER_SECOND}..={MAX_TICKS_PER_SECOND}",
                self.ticks_per_second
            ));
        }
        if !(self.cell_size >= 1.0) {
            return invalid(format!("cell_size {} must be at least 1", self.cell_size));
        }
        if !(self.canvas_width >= 0.0 && self.canvas_height >= 0.0) {
            return invalid("canvas size must not be negative".to_owned());
        }
        Ok(())
    }
}
