//! Test utilities for the body simulation.
//!
//! Provides fixtures for building bodies and engines, and assertions for
//! conserved quantities.

use bevy::math::DVec2;

/// Fixtures for creating test bodies and engines.
pub mod fixtures {
    use super::*;

    use crate::collision::CollisionMode;
    use crate::config::SimulationConfig;
    use crate::engine::Engine;
    use crate::registry::BodyRegistry;
    use crate::types::{Body, BodySpec};

    /// Build bodies from (position, velocity, mass) triples.
    ///
    /// Radius is 1.0 and trails hold 100 points.
    pub fn bodies(layout: &[(DVec2, DVec2, f64)]) -> Vec<Body> {
        let mut registry = BodyRegistry::new();
        for &(pos, vel, mass) in layout {
            registry.insert(BodySpec::new(pos, vel, mass, 1.0));
        }
        registry.as_slice().to_vec()
    }

    /// Empty, deterministically seeded engine with the given collision mode.
    pub fn engine(mode: CollisionMode) -> Engine {
        Engine::with_seed(SimulationConfig::default().with_collision_mode(mode), 7)
    }

    /// Two unit-radius bodies 1.5 apart on the x-axis, moving toward each other.
    pub fn head_on(m1: f64, v1: f64, m2: f64, v2: f64) -> (BodySpec, BodySpec) {
        (
            BodySpec::new(DVec2::ZERO, DVec2::new(v1, 0.0), m1, 1.0).named("left"),
            BodySpec::new(DVec2::new(1.5, 0.0), DVec2::new(v2, 0.0), m2, 1.0).named("right"),
        )
    }
}

/// Assertions for verifying conserved quantities.
pub mod assertions {
    use super::*;

    /// Assert two vectors agree within an absolute tolerance.
    ///
    /// # Panics
    /// Panics if the distance between them exceeds `tolerance`.
    pub fn assert_vec_close(actual: DVec2, expected: DVec2, tolerance: f64) {
        let error = (actual - expected).length();
        assert!(
            error <= tolerance,
            "vectors differ: actual={actual:?}, expected={expected:?}, \
             error={error:.6e}, tolerance={tolerance:.6e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_head_on_fixture_is_overlapping() {
        let (a, b) = fixtures::head_on(1.0, 1.0, 1.0, -1.0);
        let d = (b.pos - a.pos).length();
        assert!(d < a.radius + b.radius);
        assert_relative_eq!(d, 1.5);
    }

    #[test]
    fn test_bodies_fixture_assigns_unique_ids() {
        let bodies = fixtures::bodies(&[
            (DVec2::ZERO, DVec2::ZERO, 1.0),
            (DVec2::ONE, DVec2::ZERO, 2.0),
        ]);
        assert_ne!(bodies[0].id, bodies[1].id);
        assert_eq!(bodies[1].mass, 2.0);
    }

    #[test]
    #[should_panic(expected = "vectors differ")]
    fn test_assert_vec_close_panics() {
        assertions::assert_vec_close(DVec2::ZERO, DVec2::ONE, 0.5);
    }
}
