//! Property-based tests for the force solver and integrator using proptest.
//!
//! These tests verify conservation and invariance properties across a wide
//! range of randomly generated body layouts.

use bevy::math::DVec2;
use proptest::prelude::*;

use super::{compute_forces, integrate, total_momentum, PhysicsMode};
use crate::test_utils::fixtures;
use crate::types::Body;

/// Strategy for a body as (position, velocity, mass).
fn body_strategy() -> impl Strategy<Value = (DVec2, DVec2, f64)> {
    (
        -500.0f64..500.0,
        -500.0f64..500.0,
        -3.0f64..3.0,
        -3.0f64..3.0,
        0.5f64..1000.0,
    )
        .prop_map(|(x, y, vx, vy, m)| (DVec2::new(x, y), DVec2::new(vx, vy), m))
}

fn run_ticks(bodies: &mut [Body], mode: PhysicsMode, ticks: usize) {
    for _ in 0..ticks {
        let forces = compute_forces(bodies, mode, 0.62);
        integrate(bodies, &forces, mode, 0.1);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Total momentum stays put in n-body mode.
    ///
    /// Pairwise forces cancel exactly, so only rounding can move the sum.
    #[test]
    fn prop_momentum_conserved_nbody(
        layout in prop::collection::vec(body_strategy(), 2..8),
        ticks in 1usize..60,
    ) {
        let mut bodies = fixtures::bodies(&layout);
        let initial = total_momentum(&bodies);
        let scale: f64 = bodies.iter().map(|b| b.momentum().length()).sum::<f64>().max(1.0);

        run_ticks(&mut bodies, PhysicsMode::NBody, ticks);

        let drift = (total_momentum(&bodies) - initial).length();
        // Close encounters can produce large forces; tolerance is relative to
        // the largest velocities reached.
        let peak: f64 = bodies.iter().map(|b| b.momentum().length()).sum::<f64>().max(scale);
        prop_assert!(
            drift <= 1e-9 * peak,
            "momentum drift {drift:e} (peak {peak:e})"
        );
    }

    /// The anchor never moves in simplified mode, bit for bit.
    #[test]
    fn prop_anchor_fixed_in_simplified_mode(
        layout in prop::collection::vec(body_strategy(), 1..8),
        ticks in 1usize..60,
    ) {
        let mut bodies = fixtures::bodies(&layout);
        let (pos, vel) = (bodies[0].pos, bodies[0].vel);

        run_ticks(&mut bodies, PhysicsMode::Simplified, ticks);

        prop_assert_eq!(bodies[0].pos.x.to_bits(), pos.x.to_bits());
        prop_assert_eq!(bodies[0].pos.y.to_bits(), pos.y.to_bits());
        prop_assert_eq!(bodies[0].vel.x.to_bits(), vel.x.to_bits());
        prop_assert_eq!(bodies[0].vel.y.to_bits(), vel.y.to_bits());
    }

    /// Stored acceleration always equals force over mass.
    #[test]
    fn prop_acceleration_matches_force(
        layout in prop::collection::vec(body_strategy(), 2..6),
    ) {
        let mut bodies = fixtures::bodies(&layout);
        run_ticks(&mut bodies, PhysicsMode::NBody, 1);

        for body in &bodies {
            let expected = body.force / body.mass;
            prop_assert_eq!(body.acc, expected);
        }
    }

    /// Forces stay finite for any valid layout, including stacked and
    /// almost-stacked bodies.
    #[test]
    fn prop_forces_finite(
        layout in prop::collection::vec(body_strategy(), 1..6),
        stack in any::<bool>(),
        gap_exp in prop::option::of(-150i32..-100),
    ) {
        let mut bodies = fixtures::bodies(&layout);
        if stack {
            // Exactly coincident, or a tiny nonzero distance apart
            let gap = gap_exp.map_or(0.0, |e| 10f64.powi(e));
            for (i, body) in bodies.iter_mut().enumerate() {
                body.pos = DVec2::new(gap * i as f64, 0.0);
            }
        }
        for mode in [PhysicsMode::NBody, PhysicsMode::Simplified] {
            for f in compute_forces(&bodies, mode, 0.62) {
                prop_assert!(f.is_finite());
            }
        }
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn test_two_body_orbit_momentum() {
        let mut bodies = fixtures::bodies(&[
            (DVec2::ZERO, DVec2::ZERO, 1000.0),
            (DVec2::new(200.0, 0.0), DVec2::new(0.0, 1.8), 2.5),
        ]);
        let initial = total_momentum(&bodies);
        run_ticks(&mut bodies, PhysicsMode::NBody, 1000);
        assert!((total_momentum(&bodies) - initial).length() < 1e-9);
    }
}
