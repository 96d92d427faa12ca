//! Gravitational force accumulation for the n-body engine
//!
//! Direct all-pairs Newtonian gravity without softening. Every body sums the
//! pull of every other body in collection order, skipping its own index.

use rayon::prelude::*;

use crate::simulation::states::{Body, NVec2};

/// Newton's gravitational constant
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// G * m1 * m2 / d^2
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64) -> f64 {
    (GRAVITATIONAL_CONSTANT * mass1 * mass2) / (distance * distance)
}

/// One axis of a force of `magnitude` along a separation of length `distance`
pub fn project(magnitude: f64, delta: f64, distance: f64) -> f64 {
    (magnitude * delta) / distance
}

/// Net force on `bodies[index]` from all other bodies.
///
/// Reads only positions and masses, so it can be evaluated for every index
/// against the same snapshot in any order.
pub fn net_force_on(index: usize, bodies: &[Body]) -> NVec2 {
    let bi = &bodies[index];
    let mut total = NVec2::zeros();

    for (j, bj) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        // Accumulate per axis in collection order
        let f = bi.pairwise_force(bj);
        total.x += f.x;
        total.y += f.y;
    }

    total
}

/// Compute net forces for every body from one snapshot of `bodies`, then
/// store them (and the derived accelerations) on each body.
///
/// Each body's result depends only on the snapshot, so `parallel` changes the
/// evaluation order across bodies but never the values.
pub fn compute_net_forces(bodies: &mut [Body], parallel: bool) {
    let n = bodies.len();
    if n == 0 { // No bodies, return
        return;
    }

    let snapshot: &[Body] = &*bodies;
    let net: Vec<NVec2> = if parallel {
        (0..n).into_par_iter().map(|i| net_force_on(i, snapshot)).collect()
    } else {
        (0..n).map(|i| net_force_on(i, snapshot)).collect()
    };

    for (b, f) in bodies.iter_mut().zip(net) {
        b.apply_net_force(f);
    }
}
