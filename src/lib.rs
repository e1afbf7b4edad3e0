//! Orrery - Gravitational Body Sandbox
//!
//! A library crate providing a 2D gravity engine for stars, planets and
//! moons: n-body or anchored forces, symplectic Euler stepping, bounded
//! trails, and merge/elastic/inelastic collision handling.

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod physics;
pub mod registry;
pub mod scenarios;
pub mod time;
pub mod trail;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use collision::{CollisionMode, CollisionOutcome};
pub use config::SimulationConfig;
pub use engine::Engine;
pub use error::{EngineError, Result};
pub use physics::PhysicsMode;
pub use types::{Body, BodyId, BodySpec, BodyUpdate};
