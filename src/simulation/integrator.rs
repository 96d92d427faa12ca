//! Fixed-step time integrator for the N-body system
//!
//! Explicit Euler with the velocity advanced before the position in the same
//! step. Each phase completes for every body before the next one starts.

use super::forces::compute_net_forces;
use super::states::Body;

/// Advance all bodies by one iteration with update factor `h`.
///
/// 1. net force and acceleration for every body from the current positions
/// 2. v += h * a for every body
/// 3. x += h * v for every body, with the velocities from phase 2
pub fn euler_step(bodies: &mut [Body], h: f64, parallel: bool) {
    if bodies.is_empty() { // no bodies, return
        return;
    }

    compute_net_forces(bodies, parallel);

    for b in bodies.iter_mut() {
        b.advance_velocity(h);
    }

    for b in bodies.iter_mut() {
        b.advance_position(h);
    }
}
