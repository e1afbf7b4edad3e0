//! Semi-implicit (symplectic) Euler integration.
//!
//! Each body takes `v += a·dt` then `p += v·dt` using the force from the
//! current snapshot. Cheap and stable enough for the sandbox's fixed step,
//! and exactly momentum-conserving when forces come in equal pairs.

use bevy::math::DVec2;

use super::PhysicsMode;
use crate::types::Body;

/// Advance one body by `dt` under `force` and record its new position.
///
/// The stored acceleration is `force / mass`. Mass is positive by the
/// registry invariant, so the division is always finite.
#[inline]
pub fn step_body(body: &mut Body, force: DVec2, dt: f64) {
    body.force = force;
    body.acc = force / body.mass;
    body.vel += body.acc * dt;
    body.pos += body.vel * dt;
    body.trail.record(body.pos);
}

/// Hold a body in place for this tick: no force, no motion, trail still grows.
#[inline]
pub fn hold_body(body: &mut Body) {
    body.force = DVec2::ZERO;
    body.acc = DVec2::ZERO;
    body.trail.record(body.pos);
}

/// Integrate every body with the forces computed for this snapshot.
///
/// In simplified mode the first body is the anchor and is held.
pub fn integrate(bodies: &mut [Body], forces: &[DVec2], mode: PhysicsMode, dt: f64) {
    debug_assert_eq!(bodies.len(), forces.len());

    for (i, (body, &force)) in bodies.iter_mut().zip(forces).enumerate() {
        if mode == PhysicsMode::Simplified && i == 0 {
            hold_body(body);
            continue;
        }
        step_body(body, force, dt);
    }
}
