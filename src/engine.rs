//! The simulation engine and its command API.
//!
//! [`Engine`] owns the body registry and all per-run state. Callers drive it
//! with [`Engine::tick`] and change it only through the command methods, each
//! of which takes `&mut self` and therefore can never overlap a tick.

use std::f64::consts::TAU;

use bevy::log::{debug, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{self, CollisionMode, CollisionOutcome, Cooldown};
use crate::config::SimulationConfig;
use crate::error::{is_positive_finite, EngineError, Result};
use crate::physics::{self, PhysicsMode};
use crate::registry::BodyRegistry;
use crate::scenarios::{self, BodyPreset, SOLAR_SYSTEM};
use crate::types::{Body, BodyId, BodySpec, BodyUpdate};

/// Gravitational body simulation.
#[derive(Resource, Debug)]
pub struct Engine {
    registry: BodyRegistry,
    config: SimulationConfig,
    cooldown: Cooldown,
    rng: StdRng,
    /// Layout restored by [`Engine::reset`].
    preset: &'static [BodyPreset],
    paused: bool,
    tick_count: u64,
    /// Simulated time elapsed over all ticks.
    elapsed: f64,
    last_collision: Option<CollisionOutcome>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::solar_system(SimulationConfig::default())
    }
}

impl Engine {
    /// Empty engine with an entropy-seeded random source.
    pub fn new(config: SimulationConfig) -> Self {
        Self::from_parts(config, StdRng::from_entropy(), &[])
    }

    /// Empty engine with a fixed seed, for reproducible spawns.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Self {
        Self::from_parts(config, StdRng::seed_from_u64(seed), &[])
    }

    /// Engine loaded with the default solar-system layout.
    pub fn solar_system(config: SimulationConfig) -> Self {
        Self::from_parts(config, StdRng::from_entropy(), SOLAR_SYSTEM)
    }

    /// Engine loaded with `preset` and a fixed seed.
    pub fn from_preset(config: SimulationConfig, preset: &'static [BodyPreset], seed: u64) -> Self {
        Self::from_parts(config, StdRng::seed_from_u64(seed), preset)
    }

    fn from_parts(config: SimulationConfig, rng: StdRng, preset: &'static [BodyPreset]) -> Self {
        let mut registry = BodyRegistry::new();
        scenarios::load_presets(&mut registry, preset);
        Self {
            registry,
            config,
            cooldown: Cooldown::default(),
            rng,
            preset,
            paused: false,
            tick_count: 0,
            elapsed: 0.0,
            last_collision: None,
        }
    }

    // =========================================================================
    // Stepping
    // =========================================================================

    /// Advance the simulation by one step unless paused.
    ///
    /// Forces for every body are computed before any body moves, and every
    /// body moves before collisions are checked. At most one collision is
    /// resolved; the cooldown set is empty again when this returns.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        let mode = self.config.physics_mode();
        let dt = self.config.dt();

        let forces = physics::compute_forces(self.registry.as_slice(), mode, self.config.gravity());
        physics::integrate(self.registry.as_mut_slice(), &forces, mode, dt);

        if self.config.collisions_enabled() {
            self.handle_collisions();
            self.cooldown.clear();
        }

        self.tick_count += 1;
        self.elapsed += dt;
    }

    fn handle_collisions(&mut self) {
        let Some(contact) = collision::first_contact(self.registry.as_slice(), &self.cooldown)
        else {
            return;
        };

        let anchor = self.anchor().map(|b| b.id);
        let outcome = collision::resolve(
            &mut self.registry,
            &contact,
            self.config.collision_mode(),
            anchor,
            &mut self.cooldown,
        );

        if outcome.is_some() {
            self.last_collision = outcome;
        }
    }

    // =========================================================================
    // Lifecycle commands
    // =========================================================================

    /// Validate and insert a body.
    ///
    /// Fails if mass or radius is not positive, if position or velocity is
    /// not finite, or if `spec.parent` names a body that does not exist.
    pub fn add_body(&mut self, spec: BodySpec) -> Result<BodyId> {
        validate_spec(&spec).inspect_err(|e| warn!("Rejected body '{}': {}", spec.name, e))?;
        if let Some(parent) = spec.parent {
            if !self.registry.contains(parent) {
                return Err(EngineError::NotFound(parent));
            }
        }

        let name = spec.name.clone();
        let id = self.registry.insert(spec);
        debug!("Added body {} ({})", name, id);
        Ok(id)
    }

    /// Remove a body and everything orbiting it.
    ///
    /// Returns the removed ids; an unknown id removes nothing.
    pub fn remove_body(&mut self, id: BodyId) -> Vec<BodyId> {
        let removed = self.registry.remove_cascade(id);
        if !removed.is_empty() {
            debug!("Removed {} body(ies) starting at {}", removed.len(), id);
        }
        removed
    }

    /// Spawn a moon on a circular orbit around `parent`.
    pub fn create_moon(&mut self, parent: BodyId) -> Result<BodyId> {
        let body = self.registry.get(parent).ok_or(EngineError::NotFound(parent))?;
        let angle = self.rng.gen_range(0.0..TAU);
        let siblings = self.registry.children_of(parent).count();
        let spec = scenarios::spawn_moon(body, self.config.gravity(), angle, siblings);
        self.add_body(spec)
    }

    /// Spawn a star on a random wide orbit around the anchor.
    pub fn add_star(&mut self) -> BodyId {
        let count = self.registry.iter().filter(|b| b.is_star).count();
        let spec = scenarios::spawn_star(
            &mut self.rng,
            self.registry.first(),
            self.config.gravity(),
            count,
        );
        self.insert_spawned(spec)
    }

    /// Spawn a planet on a random orbit around the anchor.
    pub fn add_planet(&mut self) -> BodyId {
        let count = self.registry.iter().filter(|b| !b.is_star && !b.is_moon).count();
        let spec = scenarios::spawn_planet(
            &mut self.rng,
            self.registry.first(),
            self.config.gravity(),
            count,
        );
        self.insert_spawned(spec)
    }

    /// Spawner output is valid by construction.
    fn insert_spawned(&mut self, spec: BodySpec) -> BodyId {
        let name = spec.name.clone();
        let id = self.registry.insert(spec);
        debug!("Spawned {} ({})", name, id);
        id
    }

    /// Apply a partial edit to a body and clear its trail.
    ///
    /// A new mass rescales the stored acceleration against the last force.
    /// All fields are validated before any is applied.
    pub fn update_body(&mut self, id: BodyId, update: BodyUpdate) -> Result<()> {
        validate_update(&update).inspect_err(|e| warn!("Rejected update of {}: {}", id, e))?;
        let body = self.registry.get_mut(id).ok_or(EngineError::NotFound(id))?;

        if let Some(name) = update.name {
            body.name = name;
        }
        if let Some(pos) = update.pos {
            body.pos = pos;
        }
        if let Some(vel) = update.vel {
            body.vel = vel;
        }
        if let Some(mass) = update.mass {
            body.mass = mass;
            body.acc = body.force / mass;
        }
        if let Some(radius) = update.radius {
            body.radius = radius;
        }
        if let Some(color) = update.color {
            body.color = color;
        }
        body.trail.clear();
        Ok(())
    }

    /// Reload the preset layout. Settings and pause state are kept.
    pub fn reset(&mut self) {
        self.registry.clear();
        scenarios::load_presets(&mut self.registry, self.preset);
        self.cooldown.clear();
        self.last_collision = None;
        self.tick_count = 0;
        self.elapsed = 0.0;
        debug!("Reset to preset layout ({} bodies)", self.registry.len());
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn set_gravity(&mut self, gravity: f64) -> Result<()> {
        self.config.set_gravity(gravity)
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.config.set_speed(speed)
    }

    pub fn set_physics_mode(&mut self, mode: PhysicsMode) {
        self.config.set_physics_mode(mode);
    }

    pub fn set_collision_mode(&mut self, mode: CollisionMode) {
        self.config.set_collision_mode(mode);
    }

    /// Restore default gravity and speed.
    pub fn reset_settings(&mut self) {
        self.config.reset();
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the pause gate and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Bodies in registry order.
    pub fn list_bodies(&self) -> &[Body] {
        self.registry.as_slice()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.registry.get(id)
    }

    pub fn body_count(&self) -> usize {
        self.registry.len()
    }

    /// The body's parent, if it still exists.
    pub fn parent_of(&self, id: BodyId) -> Option<&Body> {
        self.registry.parent_of(id)
    }

    /// Live bodies parented to `id`.
    pub fn moons_of(&self, id: BodyId) -> impl Iterator<Item = &Body> {
        self.registry.children_of(id)
    }

    /// The fixed attractor, present only in simplified mode.
    pub fn anchor(&self) -> Option<&Body> {
        match self.config.physics_mode() {
            PhysicsMode::Simplified => self.registry.first(),
            PhysicsMode::NBody => None,
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated time advanced since creation or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Most recent resolved collision.
    pub fn last_collision(&self) -> Option<&CollisionOutcome> {
        self.last_collision.as_ref()
    }

    /// Bodies currently on collision cooldown. Always empty between ticks.
    pub fn cooldown(&self) -> &Cooldown {
        &self.cooldown
    }
}

fn validate_spec(spec: &BodySpec) -> Result<()> {
    validate_mass(spec.mass)?;
    validate_radius(spec.radius)?;
    validate_vector(spec.pos, "position")?;
    validate_vector(spec.vel, "velocity")
}

fn validate_update(update: &BodyUpdate) -> Result<()> {
    if let Some(mass) = update.mass {
        validate_mass(mass)?;
    }
    if let Some(radius) = update.radius {
        validate_radius(radius)?;
    }
    if let Some(pos) = update.pos {
        validate_vector(pos, "position")?;
    }
    if let Some(vel) = update.vel {
        validate_vector(vel, "velocity")?;
    }
    Ok(())
}

fn validate_mass(mass: f64) -> Result<()> {
    if is_positive_finite(mass) {
        Ok(())
    } else {
        Err(EngineError::InvalidMass(mass))
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    if is_positive_finite(radius) {
        Ok(())
    } else {
        Err(EngineError::InvalidRadius(radius))
    }
}

fn validate_vector(v: DVec2, field: &'static str) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFinite { field })
    }
}
