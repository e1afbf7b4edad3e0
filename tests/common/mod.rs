//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec2;
use orrery::physics::{total_kinetic_energy, total_momentum};
use orrery::{BodySpec, CollisionMode, Engine, PhysicsMode, SimulationConfig};

/// Empty engine with fixed seed and the given modes.
pub fn engine(physics: PhysicsMode, collisions: CollisionMode) -> Engine {
    let config = SimulationConfig::default()
        .with_physics_mode(physics)
        .with_collision_mode(collisions);
    Engine::with_seed(config, 42)
}

/// Body spec with unit radius.
pub fn body(pos: (f64, f64), vel: (f64, f64), mass: f64) -> BodySpec {
    BodySpec::new(DVec2::new(pos.0, pos.1), DVec2::new(vel.0, vel.1), mass, 1.0)
}

/// Total momentum of everything in the engine.
pub fn momentum(engine: &Engine) -> DVec2 {
    total_momentum(engine.list_bodies())
}

/// Total kinetic energy of everything in the engine.
pub fn kinetic_energy(engine: &Engine) -> f64 {
    total_kinetic_energy(engine.list_bodies())
}

/// Run `n` ticks.
pub fn run(engine: &mut Engine, n: usize) {
    for _ in 0..n {
        engine.tick();
    }
}
