//! Configuration types for loading run options from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! options that shape a run. The bodies themselves come from the universe
//! text file (see [`crate::io`]); this file only tunes the engine.
//!
//! # YAML format
//! Every field is optional:
//!
//! ```yaml
//! step_argument: "elapsed"  # or "fixed"
//! parallel: false           # rayon force pass
//! frame_interval: 10        # log every 10th frame
//! ```
//!
//! The engine maps this into its runtime [`Parameters`](crate::Parameters).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid run configuration: {0}")]
    ValidationError(String),
}

/// Value handed to the velocity and position updates each iteration
/// `step_argument: "elapsed"` or `step_argument: "fixed"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepArgument {
    #[default]
    #[serde(rename = "elapsed")] // Elapsed simulation time t at the start of the iteration: factors 0, dt, 2dt, ...
    ElapsedTime,

    #[serde(rename = "fixed")] // The fixed step dt every iteration, plain explicit Euler
    FixedStep,
}

impl StepArgument {
    /// Factor applied to acceleration and velocity for the iteration starting at `t`
    pub fn factor(self, t: f64, dt: f64) -> f64 {
        match self {
            StepArgument::ElapsedTime => t,
            StepArgument::FixedStep => dt,
        }
    }
}

/// Run options loaded from YAML
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub step_argument: StepArgument, // How the per-iteration update factor is chosen
    pub parallel: bool,              // `true` - evaluate the force pass across bodies with rayon
    pub frame_interval: usize,       // Log a frame every `frame_interval` frames
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            step_argument: StepArgument::ElapsedTime,
            parallel: false,
            frame_interval: 1,
        }
    }
}

impl RunConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: RunConfig = serde_yaml::from_str(text)?;
        cfg.validate()
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: RunConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()
    }

    /// Apply command-line overrides on top of the loaded values.
    /// Flags only ever switch a setting on; a frame interval of 0 becomes 1.
    pub fn with_overrides(mut self, fixed_step: bool, parallel: bool, frame_interval: Option<usize>) -> Self {
        if fixed_step {
            self.step_argument = StepArgument::FixedStep;
        }
        if parallel {
            self.parallel = true;
        }
        if let Some(interval) = frame_interval {
            self.frame_interval = interval.max(1);
        }
        self
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.frame_interval == 0 {
            return Err(ConfigError::ValidationError(
                "frame_interval must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
