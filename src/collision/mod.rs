//! Collision detection and resolution between bodies.
//!
//! Detection scans the post-move snapshot and only collects contacts;
//! resolution then applies at most one of them per tick, so a merge that
//! removes a body never invalidates a scan in progress.
//!
//! Bodies that took part in a resolution are put on a one-tick cooldown
//! and skipped by detection until the tick ends.

mod detect;
mod resolve;

use std::collections::HashSet;

use bevy::math::DVec2;

pub use detect::{find_contacts, first_contact, Contact};
pub use resolve::resolve;

use crate::types::{BodyId, ELASTIC_RESTITUTION, INELASTIC_RESTITUTION};

/// Policy applied to a detected collision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollisionMode {
    /// Collisions are ignored.
    #[default]
    Off,
    /// Perfectly inelastic union: the heavier body absorbs the lighter.
    Merge,
    /// Bounce conserving kinetic energy.
    Elastic,
    /// Bounce losing part of the kinetic energy.
    Inelastic,
}

impl CollisionMode {
    /// Coefficient of restitution for bouncing modes.
    pub fn restitution(self) -> Option<f64> {
        match self {
            CollisionMode::Elastic => Some(ELASTIC_RESTITUTION),
            CollisionMode::Inelastic => Some(INELASTIC_RESTITUTION),
            CollisionMode::Off | CollisionMode::Merge => None,
        }
    }
}

/// Bodies that already resolved a collision this tick.
#[derive(Clone, Debug, Default)]
pub struct Cooldown {
    ids: HashSet<BodyId>,
}

impl Cooldown {
    pub fn insert(&mut self, id: BodyId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// What a resolved collision did.
#[derive(Clone, Debug, PartialEq)]
pub enum CollisionOutcome {
    /// `removed` was absorbed into `survivor`.
    Merged {
        survivor: BodyId,
        removed: BodyId,
        mass: f64,
        radius: f64,
        velocity: DVec2,
    },
    /// The pair bounced; `impulse` was applied to `second` and its negation
    /// to `first`.
    Bounced {
        mode: CollisionMode,
        first: BodyId,
        second: BodyId,
        impulse: DVec2,
    },
}

impl CollisionOutcome {
    /// Ids of the two bodies involved, in detection order for bounces and
    /// survivor first for merges.
    pub fn bodies(&self) -> (BodyId, BodyId) {
        match *self {
            CollisionOutcome::Merged { survivor, removed, .. } => (survivor, removed),
            CollisionOutcome::Bounced { first, second, .. } => (first, second),
        }
    }
}
