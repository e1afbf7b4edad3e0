//! Run-time configuration for the simulation.

use bevy::prelude::Resource;

use crate::collision::CollisionMode;
use crate::error::{is_positive_finite, EngineError, Result};
use crate::physics::PhysicsMode;
use crate::types::{BASE_STEP, DEFAULT_GRAVITY, DEFAULT_SPEED};

/// Settings read by every tick.
///
/// Numeric fields are only reachable through validated setters so that
/// the engine never integrates with a zero, negative or non-finite value.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Gravitational constant. Default: 0.62.
    gravity: f64,
    /// Speed multiplier applied to [`BASE_STEP`]. Default: 1.0.
    speed: f64,
    physics_mode: PhysicsMode,
    collision_mode: CollisionMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            speed: DEFAULT_SPEED,
            physics_mode: PhysicsMode::default(),
            collision_mode: CollisionMode::default(),
        }
    }
}

impl SimulationConfig {
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn physics_mode(&self) -> PhysicsMode {
        self.physics_mode
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.collision_mode
    }

    /// Simulated time covered by one tick.
    pub fn dt(&self) -> f64 {
        BASE_STEP * self.speed
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collision_mode != CollisionMode::Off
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<()> {
        if !is_positive_finite(gravity) {
            return Err(EngineError::InvalidGravity(gravity));
        }
        self.gravity = gravity;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !is_positive_finite(speed) {
            return Err(EngineError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn set_physics_mode(&mut self, mode: PhysicsMode) {
        self.physics_mode = mode;
    }

    pub fn set_collision_mode(&mut self, mode: CollisionMode) {
        self.collision_mode = mode;
    }

    /// Builder form of [`Self::set_physics_mode`].
    pub fn with_physics_mode(mut self, mode: PhysicsMode) -> Self {
        self.physics_mode = mode;
        self
    }

    /// Builder form of [`Self::set_collision_mode`].
    pub fn with_collision_mode(mut self, mode: CollisionMode) -> Self {
        self.collision_mode = mode;
        self
    }

    /// Restore gravity and speed to their defaults. Modes are left alone.
    pub fn reset(&mut self) {
        self.gravity = DEFAULT_GRAVITY;
        self.speed = DEFAULT_SPEED;
    }
}
