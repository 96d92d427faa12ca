pub mod simulation;
pub mod configuration;
pub mod io;
pub mod visualization;

pub use simulation::states::{Body, Universe, NVec2};
pub use simulation::forces::{compute_net_forces, net_force_on, GRAVITATIONAL_CONSTANT};
pub use simulation::integrator::euler_step;
pub use simulation::params::Parameters;
pub use simulation::engine::{FrameObserver, SimState, Simulator};
pub use simulation::error::SimError;

pub use configuration::config::{ConfigError, RunConfig, StepArgument};

pub use io::error::UniverseFileError;
pub use io::reader::{parse_universe, read_universe, read_universe_file};
pub use io::writer::{format_scientific, universe_to_string, write_universe};

pub use visualization::frames::{display_coords, FrameLogger};
