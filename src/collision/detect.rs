//! Overlap detection for approaching pairs.

use bevy::math::DVec2;

use super::Cooldown;
use crate::types::{Body, BodyId};

/// An overlapping pair that is closing along its line of centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Earlier body in registry order.
    pub first: BodyId,
    /// Later body in registry order.
    pub second: BodyId,
    /// Unit vector from `first` toward `second`.
    pub normal: DVec2,
    /// Speed at which the gap is shrinking along `normal`, always positive.
    pub closing_speed: f64,
    /// Center distance, strictly between zero and the sum of radii.
    pub distance: f64,
}

/// Test a single pair. Coincident centers have no normal and never collide.
fn check_pair(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    if distance <= 0.0 || distance >= a.radius + b.radius {
        return None;
    }

    let normal = delta / distance;
    // Velocity of b as seen from a; negative along the normal means closing
    let approach = (b.vel - a.vel).dot(normal);
    if approach >= 0.0 {
        return None;
    }

    Some(Contact {
        first: a.id,
        second: b.id,
        normal,
        closing_speed: -approach,
        distance,
    })
}

/// All actionable contacts in the snapshot, in `(i, j)` order with `i < j`.
///
/// Pairs involving a body on cooldown are skipped.
pub fn find_contacts(bodies: &[Body], cooldown: &Cooldown) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for (i, a) in bodies.iter().enumerate() {
        if cooldown.contains(a.id) {
            continue;
        }
        for b in &bodies[i + 1..] {
            if cooldown.contains(b.id) {
                continue;
            }
            if let Some(contact) = check_pair(a, b) {
                contacts.push(contact);
            }
        }
    }

    contacts
}

/// The contact that gets resolved this tick; the rest wait for later ticks.
pub fn first_contact(bodies: &[Body], cooldown: &Cooldown) -> Option<Contact> {
    find_contacts(bodies, cooldown).into_iter().next()
}
