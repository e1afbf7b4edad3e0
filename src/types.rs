//! Core body types and simulation constants.

use std::fmt;

use bevy::math::DVec2;

use crate::trail::Trail;

/// Simulated time units advanced by one tick at speed 1.0.
pub const BASE_STEP: f64 = 0.1;

/// Default gravitational constant in simulation units.
pub const DEFAULT_GRAVITY: f64 = 0.62;

/// Default speed multiplier.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Default maximum trail length for bodies created without one.
pub const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Radius growth applied to the survivor of a merge.
pub const MERGE_GROWTH: f64 = 1.1;

/// Coefficient of restitution for elastic collisions.
pub const ELASTIC_RESTITUTION: f64 = 1.0;

/// Coefficient of restitution for inelastic collisions.
pub const INELASTIC_RESTITUTION: f64 = 0.5;

/// Stable identity of a body.
///
/// Ids are allocated by the registry from a counter that only moves forward,
/// so an id that has been removed never resolves again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u64);

impl BodyId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for display and logging.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A simulated point mass.
///
/// Bodies are owned by the registry. Outside the crate they are only handed
/// out by shared reference, so edits go through [`crate::Engine::update_body`].
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    /// Position in simulation units.
    pub pos: DVec2,
    /// Velocity in simulation units per time unit.
    pub vel: DVec2,
    /// Net force from the most recent tick.
    pub force: DVec2,
    /// Acceleration from the most recent tick, always `force / mass`.
    pub acc: DVec2,
    pub mass: f64,
    pub radius: f64,
    /// Display colour as a `#RRGGBB` string.
    pub color: String,
    pub is_star: bool,
    pub is_moon: bool,
    /// Display hint for ringed planets.
    pub has_rings: bool,
    /// Non-owning link used for moon grouping. May be stale; resolve it
    /// through the registry before use.
    pub parent: Option<BodyId>,
    pub trail: Trail,
    /// Reference orbit radius for overlays. Informational only.
    pub orbit_radius: Option<f64>,
}

impl Body {
    pub(crate) fn from_spec(id: BodyId, spec: BodySpec) -> Self {
        Self {
            id,
            name: spec.name,
            pos: spec.pos,
            vel: spec.vel,
            force: DVec2::ZERO,
            acc: DVec2::ZERO,
            mass: spec.mass,
            radius: spec.radius,
            color: spec.color,
            is_star: spec.is_star,
            is_moon: spec.is_moon,
            has_rings: spec.has_rings,
            parent: spec.parent,
            trail: Trail::new(spec.max_trail_length),
            orbit_radius: spec.orbit_radius,
        }
    }

    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass
    }

    /// Kinetic energy `m * v² / 2`.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.vel.length_squared()
    }
}

/// Parameters for creating a body.
#[derive(Clone, Debug)]
pub struct BodySpec {
    pub name: String,
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub color: String,
    pub is_star: bool,
    pub is_moon: bool,
    pub has_rings: bool,
    pub parent: Option<BodyId>,
    pub max_trail_length: usize,
    pub orbit_radius: Option<f64>,
}

impl Default for BodySpec {
    fn default() -> Self {
        Self {
            name: "Body".to_string(),
            pos: DVec2::ZERO,
            vel: DVec2::ZERO,
            mass: 1.0,
            radius: 1.0,
            color: "#FFFFFF".to_string(),
            is_star: false,
            is_moon: false,
            has_rings: false,
            parent: None,
            max_trail_length: DEFAULT_TRAIL_LENGTH,
            orbit_radius: None,
        }
    }
}

impl BodySpec {
    /// Create a spec with the given kinematics and physical size.
    pub fn new(pos: DVec2, vel: DVec2, mass: f64, radius: f64) -> Self {
        Self {
            pos,
            vel,
            mass,
            radius,
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_trail_length(mut self, max_trail_length: usize) -> Self {
        self.max_trail_length = max_trail_length;
        self
    }

    pub fn star(mut self) -> Self {
        self.is_star = true;
        self
    }

    /// Mark as a moon of `parent`.
    pub fn moon_of(mut self, parent: BodyId) -> Self {
        self.is_moon = true;
        self.parent = Some(parent);
        self
    }
}

/// Partial edit applied by [`crate::Engine::update_body`].
///
/// Fields left as `None` are unchanged. Any edit clears the body's trail.
#[derive(Clone, Debug, Default)]
pub struct BodyUpdate {
    pub name: Option<String>,
    pub pos: Option<DVec2>,
    pub vel: Option<DVec2>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub color: Option<String>,
}
