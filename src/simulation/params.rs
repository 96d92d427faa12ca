//! Numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - total simulated time and fixed step size,
//! - the step argument mode for the Euler updates,
//! - whether the force pass runs in parallel

use crate::configuration::config::{RunConfig, StepArgument};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub total_time: f64,              // time end
    pub dt: f64,                      // step size
    pub step_argument: StepArgument,  // factor passed to the updates
    pub parallel: bool,               // rayon force pass
}

impl Parameters {
    /// Sequential run using the elapsed time as the step argument
    pub fn new(total_time: f64, dt: f64) -> Self {
        Self {
            total_time,
            dt,
            step_argument: StepArgument::ElapsedTime,
            parallel: false,
        }
    }

    /// Runtime parameters from the loaded run configuration
    pub fn from_config(total_time: f64, dt: f64, cfg: &RunConfig) -> Self {
        Self {
            total_time,
            dt,
            step_argument: cfg.step_argument,
            parallel: cfg.parallel,
        }
    }

    pub fn with_step_argument(mut self, step_argument: StepArgument) -> Self {
        self.step_argument = step_argument;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
