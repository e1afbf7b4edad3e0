//! Collision response policies.

use bevy::log::info;
use bevy::math::DVec2;

use super::{CollisionMode, CollisionOutcome, Contact, Cooldown};
use crate::registry::BodyRegistry;
use crate::types::{BodyId, MERGE_GROWTH};

/// Apply `mode` to a detected contact.
///
/// `anchor` names a body that must not be moved by the response (the
/// simplified-mode anchor). It has infinite effective mass: impulses do not
/// change its velocity and it always survives a merge.
///
/// Returns `None` when nothing happened: mode is off, one of the bodies is
/// gone, or the pair is already separating.
pub fn resolve(
    registry: &mut BodyRegistry,
    contact: &Contact,
    mode: CollisionMode,
    anchor: Option<BodyId>,
    cooldown: &mut Cooldown,
) -> Option<CollisionOutcome> {
    match mode {
        CollisionMode::Off => None,
        CollisionMode::Merge => merge(registry, contact, anchor, cooldown),
        CollisionMode::Elastic | CollisionMode::Inelastic => {
            let restitution = mode.restitution()?;
            bounce(registry, contact, mode, restitution, anchor, cooldown)
        }
    }
}

/// Perfectly inelastic union of the pair.
fn merge(
    registry: &mut BodyRegistry,
    contact: &Contact,
    anchor: Option<BodyId>,
    cooldown: &mut Cooldown,
) -> Option<CollisionOutcome> {
    let a = registry.get(contact.first)?;
    let b = registry.get(contact.second)?;

    // Heavier survives, ties go to the earlier body
    let (survivor, absorbed) = if anchor == Some(a.id) {
        (a, b)
    } else if anchor == Some(b.id) || b.mass > a.mass {
        (b, a)
    } else {
        (a, b)
    };

    let mass = a.mass + b.mass;
    let velocity = if anchor == Some(survivor.id) {
        survivor.vel
    } else {
        (a.vel * a.mass + b.vel * b.mass) / mass
    };
    let radius = a.radius.max(b.radius) * MERGE_GROWTH;
    let (survivor_id, removed_id) = (survivor.id, absorbed.id);

    info!(
        "Merge: {} ({}) absorbed {} ({}), mass now {:.3}",
        survivor.name, survivor_id, absorbed.name, removed_id, mass
    );

    let body = registry.get_mut(survivor_id)?;
    body.mass = mass;
    body.vel = velocity;
    body.radius = radius;
    body.trail.clear();

    registry.detach(removed_id);
    cooldown.insert(survivor_id);

    Some(CollisionOutcome::Merged {
        survivor: survivor_id,
        removed: removed_id,
        mass,
        radius,
        velocity,
    })
}

/// Impulse-based bounce with coefficient of restitution `e`.
fn bounce(
    registry: &mut BodyRegistry,
    contact: &Contact,
    mode: CollisionMode,
    restitution: f64,
    anchor: Option<BodyId>,
    cooldown: &mut Cooldown,
) -> Option<CollisionOutcome> {
    let a = registry.get(contact.first)?;
    let b = registry.get(contact.second)?;

    let delta = b.pos - a.pos;
    let distance = delta.length();
    if distance == 0.0 {
        return None;
    }
    let normal = delta / distance;

    // Relative velocity of b with respect to a along the normal
    let approach = (b.vel - a.vel).dot(normal);
    if approach > 0.0 {
        return None;
    }

    let inv_mass = |id: BodyId, mass: f64| if anchor == Some(id) { 0.0 } else { 1.0 / mass };
    let inv_a = inv_mass(a.id, a.mass);
    let inv_b = inv_mass(b.id, b.mass);

    // J = -(1 + e) * v_rel·n / (1/m1 + 1/m2), positive while closing
    let j = -(1.0 + restitution) * approach / (inv_a + inv_b);
    let impulse = normal * j;

    info!(
        "{:?} collision: {} ({}) and {} ({}), impulse {:.4}",
        mode, a.name, a.id, b.name, b.id, j
    );

    let (first, second) = (a.id, b.id);
    apply_impulse(registry, first, -impulse * inv_a);
    apply_impulse(registry, second, impulse * inv_b);

    cooldown.insert(first);
    cooldown.insert(second);

    Some(CollisionOutcome::Bounced {
        mode,
        first,
        second,
        impulse,
    })
}

fn apply_impulse(registry: &mut BodyRegistry, id: BodyId, delta_v: DVec2) {
    if let Some(body) = registry.get_mut(id) {
        body.vel += delta_v;
    }
}
