use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid time step {0}: must be positive and finite")]
    InvalidTimeStep(f64),

    #[error("Invalid total time {0}: must be finite")]
    InvalidTotalTime(f64),

    #[error("Time step {dt} is below the float spacing at total time {total_time}, the clock would stall")]
    StalledTimeStep { dt: f64, total_time: f64 },
}
