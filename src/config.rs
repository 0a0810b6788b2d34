//! Study configuration loaded from JSON
//!
//! Every field has a default, so an empty object `{}` describes the
//! reference scenario: a 31 cm slab at 38 °C whose faces are raised to
//! 149 °C, diffusivity 93 cm²/h, observed for half an hour.
//!
//! ```json
//! {
//!   "problem": { "diffusivity": 93.0, "width": 31.0, "time_stop": 0.5 },
//!   "grid": { "delta_x": 0.05, "delta_t": 0.01 },
//!   "laasonen_delta_ts": [0.025, 0.05, 0.1],
//!   "first_step_horizon_steps": 5,
//!   "output_dir": "Results"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::HeatError;
use crate::physics::ProblemParameters;

/// Errors raised while loading a study configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<HeatError> for ConfigError {
    fn from(error: HeatError) -> Self {
        ConfigError::Invalid(error.to_string())
    }
}

/// Problem constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// cm²/h
    #[serde(default = "default_diffusivity")]
    pub diffusivity: f64,
    /// cm
    #[serde(default = "default_width")]
    pub width: f64,
    /// °C
    #[serde(default = "default_internal_temperature")]
    pub internal_temperature: f64,
    /// °C
    #[serde(default = "default_surface_temperature")]
    pub surface_temperature: f64,
    /// h
    #[serde(default = "default_time_stop")]
    pub time_stop: f64,
}

/// Grid steps shared by every study
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_delta_x")]
    pub delta_x: f64,
    #[serde(default = "default_delta_t")]
    pub delta_t: f64,
}

/// Full comparison run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub problem: ProblemConfig,
    #[serde(default)]
    pub grid: GridConfig,
    /// Time steps of the Laasonen time-step study
    #[serde(default = "default_laasonen_delta_ts")]
    pub laasonen_delta_ts: Vec<f64>,
    /// Horizon of the first-step study, in time steps
    #[serde(default = "default_first_step_horizon_steps")]
    pub first_step_horizon_steps: usize,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_diffusivity() -> f64 {
    93.0
}
fn default_width() -> f64 {
    31.0
}
fn default_internal_temperature() -> f64 {
    38.0
}
fn default_surface_temperature() -> f64 {
    149.0
}
fn default_time_stop() -> f64 {
    0.5
}
fn default_delta_x() -> f64 {
    0.05
}
fn default_delta_t() -> f64 {
    0.01
}
fn default_laasonen_delta_ts() -> Vec<f64> {
    vec![0.025, 0.05, 0.1]
}
fn default_first_step_horizon_steps() -> usize {
    5
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("Results")
}

impl Default for ProblemConfig {
    fn default() -> Self {
        ProblemConfig {
            diffusivity: default_diffusivity(),
            width: default_width(),
            internal_temperature: default_internal_temperature(),
            surface_temperature: default_surface_temperature(),
            time_stop: default_time_stop(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            delta_x: default_delta_x(),
            delta_t: default_delta_t(),
        }
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        StudyConfig {
            problem: ProblemConfig::default(),
            grid: GridConfig::default(),
            laasonen_delta_ts: default_laasonen_delta_ts(),
            first_step_horizon_steps: default_first_step_horizon_steps(),
            output_dir: default_output_dir(),
        }
    }
}

impl StudyConfig {
    /// Load from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check everything that would otherwise only fail mid-run
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.problem_parameters()?;

        let steps = std::iter::once(self.grid.delta_t).chain(self.laasonen_delta_ts.iter().copied());
        for delta_t in steps {
            if !(delta_t.is_finite() && delta_t > 0.0) {
                return Err(ConfigError::Invalid(format!("time step {delta_t} must be positive")));
            }
        }
        if !(self.grid.delta_x.is_finite() && self.grid.delta_x > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "space step {} must be positive",
                self.grid.delta_x
            )));
        }
        if self.first_step_horizon_steps == 0 {
            return Err(ConfigError::Invalid(
                "first_step_horizon_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Validated parameter set for the configured problem
    pub fn problem_parameters(&self) -> Result<ProblemParameters, HeatError> {
        let p = &self.problem;
        ProblemParameters::from_values(
            p.diffusivity,
            p.width,
            p.internal_temperature,
            p.surface_temperature,
            p.time_stop,
        )
    }
}
