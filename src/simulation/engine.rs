//! Time-stepping driver
//!
//! `Simulator` owns the universe and runs the fixed-increment loop
//! `Idle -> Stepping -> Done`, handing each frame to a [`FrameObserver`].

use log::{debug, info};

use crate::configuration::config::StepArgument;
use crate::simulation::error::SimError;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::Universe;

/// Receives the universe once before the loop and after every iteration
pub trait FrameObserver {
    fn on_frame(&mut self, universe: &Universe, t: f64);
}

impl<F> FrameObserver for F
where
    F: FnMut(&Universe, f64),
{
    fn on_frame(&mut self, universe: &Universe, t: f64) {
        self(universe, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Idle,     // constructed, not advanced
    Stepping, // at least one iteration taken, t < total_time
    Done,     // t >= total_time
}

#[derive(Debug, Clone)]
pub struct Simulator {
    universe: Universe,
    parameters: Parameters,
    state: SimState,
    t: f64,       // elapsed simulation time
    steps: usize, // iterations taken
}

impl Simulator {
    /// Rejects parameters that would keep the loop from terminating: an
    /// infinite total time, a non-positive or non-finite step, or a step
    /// smaller than the float spacing at `total_time` (where `t + dt == t`).
    /// A run with `total_time <= 0` takes no iterations and accepts any step.
    pub fn new(universe: Universe, parameters: Parameters) -> Result<Self, SimError> {
        let (total_time, dt) = (parameters.total_time, parameters.dt);
        if total_time > 0.0 {
            if total_time.is_infinite() {
                return Err(SimError::InvalidTotalTime(total_time));
            }
            if !(dt > 0.0 && dt.is_finite()) {
                return Err(SimError::InvalidTimeStep(dt));
            }
            // every t below total_time has a spacing no wider than this
            let spacing = f64::from_bits(total_time.to_bits() + 1) - total_time;
            if dt < spacing {
                return Err(SimError::StalledTimeStep { dt, total_time });
            }
        }

        Ok(Self {
            universe,
            parameters,
            state: SimState::Idle,
            t: 0.0,
            steps: 0,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn into_universe(self) -> Universe {
        self.universe
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    /// Run one iteration if `t < total_time`. Returns `false` once done.
    pub fn step(&mut self) -> bool {
        if !(self.t < self.parameters.total_time) {
            self.state = SimState::Done;
            return false;
        }

        let h = self.parameters.step_argument.factor(self.t, self.parameters.dt);
        euler_step(&mut self.universe.bodies, h, self.parameters.parallel);

        self.t += self.parameters.dt;
        self.steps += 1;
        self.state = if self.t < self.parameters.total_time {
            SimState::Stepping
        } else {
            SimState::Done
        };

        debug!("step {}: h = {:e}, t = {:e}", self.steps, h, self.t);
        true
    }

    /// Run to completion, framing the initial state and every iteration
    pub fn run<O: FrameObserver + ?Sized>(&mut self, observer: &mut O) -> &Universe {
        info!(
            "simulating {} bodies: total_time = {:e}, dt = {:e}, step argument = {}, parallel = {}",
            self.universe.len(),
            self.parameters.total_time,
            self.parameters.dt,
            match self.parameters.step_argument {
                StepArgument::ElapsedTime => "elapsed",
                StepArgument::FixedStep => "fixed",
            },
            self.parameters.parallel,
        );

        observer.on_frame(&self.universe, self.t);
        while self.step() {
            observer.on_frame(&self.universe, self.t);
        }

        info!("simulation done after {} steps, t = {:e}", self.steps, self.t);
        &self.universe
    }
}
