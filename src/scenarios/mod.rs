//! Body factories: the default preset layout and spawners for new stars,
//! planets and moons.
//!
//! Spawners only build [`BodySpec`]s; the engine validates and inserts
//! them. Stars and planets are placed on a random circle around the anchor
//! (the first body), moons on a circle around their parent, each with a
//! tangential velocity derived from the gravitational constant.

pub mod presets;

use std::f64::consts::TAU;

use bevy::math::DVec2;
use rand::Rng;

use crate::registry::BodyRegistry;
use crate::types::{Body, BodyId, BodySpec};

pub use presets::{BodyPreset, SOLAR_SYSTEM};

/// Colour palette for spawned planets.
pub const PLANET_COLORS: &[&str] = &[
    "#4A90E2", "#CD5C5C", "#8C7853", "#FFC649", "#4FD0E7", "#4166F5",
];

/// Colour of spawned stars.
pub const STAR_COLOR: &str = "#FFD700";

/// Colour of spawned moons.
pub const MOON_COLOR: &str = "#888888";

/// Moon orbit distance in parent radii.
pub const MOON_DISTANCE_FACTOR: f64 = 3.0;

/// Moon mass as a fraction of the parent's.
pub const MOON_MASS_FRACTION: f64 = 0.01;

/// Moon radius as a fraction of the parent's, before the floor.
pub const MOON_RADIUS_FRACTION: f64 = 0.3;

/// Smallest radius a spawned moon gets.
pub const MOON_MIN_RADIUS: f64 = 2.0;

/// Insert every preset into the registry in table order.
pub fn load_presets(registry: &mut BodyRegistry, presets: &[BodyPreset]) -> Vec<BodyId> {
    presets.iter().map(|p| registry.insert(p.to_spec())).collect()
}

/// Position and velocity on a circle of `distance` around `center`.
///
/// The velocity is `speed_factor` times the circular speed
/// `sqrt(G * M / d)`, tangential (counter-clockwise) and relative to the
/// center's own velocity. Without a center the body sits at rest around
/// the origin.
pub fn orbital_placement(
    center: Option<&Body>,
    distance: f64,
    angle: f64,
    gravity: f64,
    speed_factor: f64,
) -> (DVec2, DVec2) {
    let radial = DVec2::new(angle.cos(), angle.sin());
    let tangent = DVec2::new(-angle.sin(), angle.cos());

    match center {
        Some(center) => {
            let speed = speed_factor * (gravity * center.mass / distance).sqrt();
            (center.pos + radial * distance, center.vel + tangent * speed)
        }
        None => (radial * distance, DVec2::ZERO),
    }
}

/// A random star on a wide orbit around the anchor.
///
/// `star_count` is the number of stars already present, used for naming.
pub fn spawn_star(
    rng: &mut impl Rng,
    anchor: Option<&Body>,
    gravity: f64,
    star_count: usize,
) -> BodySpec {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(300.0..500.0);
    let (pos, vel) = orbital_placement(anchor, distance, angle, gravity, 0.6);

    BodySpec {
        name: format!("Star {}", star_count + 1),
        mass: rng.gen_range(500.0..1000.0),
        radius: rng.gen_range(15.0..25.0),
        color: STAR_COLOR.to_string(),
        is_star: true,
        max_trail_length: 100,
        ..BodySpec::new(pos, vel, 1.0, 1.0)
    }
}

/// A random planet on a slightly sub-circular orbit around the anchor.
///
/// `planet_count` is the number of planets already present, used for naming.
pub fn spawn_planet(
    rng: &mut impl Rng,
    anchor: Option<&Body>,
    gravity: f64,
    planet_count: usize,
) -> BodySpec {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(250.0..650.0);
    let (pos, vel) = orbital_placement(anchor, distance, angle, gravity, 0.8);
    let color = PLANET_COLORS[rng.gen_range(0..PLANET_COLORS.len())];

    BodySpec {
        name: format!("Planet {}", planet_count + 1),
        mass: rng.gen_range(1.0..11.0),
        radius: rng.gen_range(4.0..12.0),
        color: color.to_string(),
        max_trail_length: 80,
        orbit_radius: Some(distance),
        ..BodySpec::new(pos, vel, 1.0, 1.0)
    }
}

/// A moon on a circular orbit around `parent`.
///
/// `sibling_count` is the number of moons the parent already has.
pub fn spawn_moon(parent: &Body, gravity: f64, angle: f64, sibling_count: usize) -> BodySpec {
    let distance = parent.radius * MOON_DISTANCE_FACTOR;
    let (pos, vel) = orbital_placement(Some(parent), distance, angle, gravity, 1.0);

    BodySpec {
        name: format!("{} Moon {}", parent.name, sibling_count + 1),
        color: MOON_COLOR.to_string(),
        max_trail_length: 30,
        orbit_radius: Some(distance),
        ..BodySpec::new(
            pos,
            vel,
            parent.mass * MOON_MASS_FRACTION,
            (parent.radius * MOON_RADIUS_FRACTION).max(MOON_MIN_RADIUS),
        )
        .moon_of(parent.id)
    }
}
