pub mod states;
pub mod params;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
