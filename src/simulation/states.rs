//! Core state types for the N-body simulation.
//!
//! Defines the 2D body and the universe that owns them:
//! - `Body` one point mass with its kinematic state, using `NVec2`
//! - `Universe` the body collection plus the display radius
//!
//! Bodies are identified by their index in `Universe::bodies`.

use nalgebra::Vector2;

use crate::simulation::forces;

pub type NVec2 = Vector2<f64>;

/// One point mass in the plane.
///
/// Position and velocity are mutated in place every step. Acceleration and
/// net force are derived by the force pass and cannot be set directly.
/// Mass and label are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: NVec2,     // current position
    velocity: NVec2,     // current velocity
    acceleration: NVec2, // net_force / mass from the last force pass
    net_force: NVec2,    // per-step accumulator, recomputed every step
    mass: f64,
    label: String, // display tag, no physical meaning
}

impl Body {
    /// Create a body with zero acceleration and net force.
    ///
    /// `mass` must be positive. It is not checked here: a zero or negative
    /// mass turns the derived acceleration into `inf`/`NaN` on the first
    /// force pass and those values propagate through the run.
    pub fn new(position: NVec2, velocity: NVec2, mass: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            velocity,
            acceleration: NVec2::zeros(),
            net_force: NVec2::zeros(),
            mass,
            label: label.into(),
        }
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> NVec2 {
        self.acceleration
    }

    pub fn net_force(&self) -> NVec2 {
        self.net_force
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Euclidean distance between the two positions. Coincident bodies give 0,
    /// callers dividing by it must expect `inf`/`NaN`.
    pub fn distance_to(&self, other: &Body) -> f64 {
        let dx = other.position.x - self.position.x;
        let dy = other.position.y - self.position.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Magnitude of the gravitational attraction between the two bodies.
    /// Unbounded as the distance goes to zero.
    pub fn pairwise_force_magnitude(&self, other: &Body) -> f64 {
        forces::gravitational_force(self.mass, other.mass, self.distance_to(other))
    }

    /// Force `other` exerts on this body, projected onto x and y.
    pub fn pairwise_force(&self, other: &Body) -> NVec2 {
        let magnitude = self.pairwise_force_magnitude(other);
        let distance = self.distance_to(other);
        NVec2::new(
            forces::project(magnitude, other.position.x - self.position.x, distance),
            forces::project(magnitude, other.position.y - self.position.y, distance),
        )
    }

    /// Store the result of a force pass: net force and `acceleration = force / mass`.
    pub fn apply_net_force(&mut self, force: NVec2) {
        self.net_force = force;
        self.acceleration = NVec2::new(force.x / self.mass, force.y / self.mass);
    }

    /// v += h * a
    pub fn advance_velocity(&mut self, h: f64) {
        self.velocity.x += h * self.acceleration.x;
        self.velocity.y += h * self.acceleration.y;
    }

    /// x += h * v, using the velocity already advanced this step
    pub fn advance_position(&mut self, h: f64) {
        self.position.x += h * self.velocity.x;
        self.position.y += h * self.velocity.y;
    }
}

/// The simulated bodies together with the display radius.
///
/// `radius` bounds the rendered coordinate range `[-radius, radius]` and is
/// written back out with the results. No physics formula reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    pub bodies: Vec<Body>, // collection of bodies, index is identity
    pub radius: f64,       // display radius
}

impl Universe {
    pub fn new(bodies: Vec<Body>, radius: f64) -> Self {
        Self { bodies, radius }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
