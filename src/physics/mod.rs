//! Force solver and integrator for the body simulation.
//!
//! One tick computes forces for the whole snapshot ([`compute_forces`]),
//! then integrates every body ([`integrate`]). The diagnostics here are
//! read-only summaries of a snapshot used for inspection and tests.

mod gravity;
mod integrator;

#[cfg(test)]
mod proptest_physics;

use bevy::math::DVec2;

pub use gravity::{compute_forces, pairwise_force};
pub use integrator::{hold_body, integrate, step_body};

use crate::types::Body;

/// How gravity is summed each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PhysicsMode {
    /// Every pair of bodies attracts, O(n²) per tick.
    #[default]
    NBody,
    /// Only the first body (the anchor) attracts; it never moves.
    Simplified,
}

/// Total linear momentum `Σ m·v`.
pub fn total_momentum(bodies: &[Body]) -> DVec2 {
    bodies.iter().map(Body::momentum).sum()
}

/// Total kinetic energy `Σ m·v²/2`.
pub fn total_kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Mass-weighted mean position, or `None` for an empty snapshot.
pub fn center_of_mass(bodies: &[Body]) -> Option<DVec2> {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if bodies.is_empty() || total_mass <= 0.0 {
        return None;
    }
    let weighted: DVec2 = bodies.iter().map(|b| b.pos * b.mass).sum();
    Some(weighted / total_mass)
}
