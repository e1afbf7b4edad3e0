//! Newtonian gravity between bodies.
//!
//! Forces are computed for a whole snapshot at once and returned as a
//! vector parallel to the input slice, so no position moves until every
//! pairwise contribution is known.

use bevy::math::DVec2;

use super::PhysicsMode;
use crate::types::Body;

/// Gravitational force exerted on body 1 by body 2.
///
/// `F = G * m1 * m2 / d²` directed from body 1 toward body 2. Coincident
/// or nearly coincident centers whose force would overflow give a zero
/// force rather than a singularity.
#[inline]
pub fn pairwise_force(p1: DVec2, m1: f64, p2: DVec2, m2: f64, gravity: f64) -> DVec2 {
    let delta = p2 - p1;
    let d_squared = delta.length_squared();

    if d_squared == 0.0 {
        return DVec2::ZERO;
    }

    let magnitude = gravity * m1 * m2 / d_squared;
    if !magnitude.is_finite() {
        return DVec2::ZERO;
    }

    let direction = delta / d_squared.sqrt();
    direction * magnitude
}

/// Net force on every body for the current snapshot.
///
/// # Arguments
/// * `bodies` - Registry snapshot in iteration order
/// * `mode` - N-body summation or anchor-only attraction
/// * `gravity` - Gravitational constant
///
/// # Returns
/// One force per body, indexed like `bodies`
pub fn compute_forces(bodies: &[Body], mode: PhysicsMode, gravity: f64) -> Vec<DVec2> {
    let mut forces = vec![DVec2::ZERO; bodies.len()];

    match mode {
        PhysicsMode::NBody => {
            for i in 0..bodies.len() {
                for j in (i + 1)..bodies.len() {
                    let (a, b) = (&bodies[i], &bodies[j]);
                    let f = pairwise_force(a.pos, a.mass, b.pos, b.mass, gravity);
                    forces[i] += f;
                    forces[j] -= f;
                }
            }
        }
        PhysicsMode::Simplified => {
            // Anchor attracts everyone, feels nothing
            if let Some((anchor, rest)) = bodies.split_first() {
                for (force, body) in forces[1..].iter_mut().zip(rest) {
                    *force = pairwise_force(body.pos, body.mass, anchor.pos, anchor.mass, gravity);
                }
            }
        }
    }

    forces
}
