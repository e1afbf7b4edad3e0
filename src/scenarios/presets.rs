//! Preset body layouts.
//!
//! The default layout is a toy solar system: a heavy Sun at the origin and
//! eight planets on the positive x-axis, each with a tangential velocity
//! close to circular for the default gravitational constant.

use bevy::math::DVec2;

use crate::types::BodySpec;

/// Static description of a body in a preset layout.
#[derive(Clone, Copy, Debug)]
pub struct BodyPreset {
    pub name: &'static str,
    pub pos: DVec2,
    pub vel: DVec2,
    pub mass: f64,
    pub radius: f64,
    pub color: &'static str,
    pub max_trail_length: usize,
    /// Reference orbit radius for overlays; `None` for the Sun.
    pub orbit_radius: Option<f64>,
    pub is_star: bool,
    pub has_rings: bool,
}

impl BodyPreset {
    /// Creation parameters for this preset.
    pub fn to_spec(&self) -> BodySpec {
        BodySpec {
            name: self.name.to_string(),
            pos: self.pos,
            vel: self.vel,
            mass: self.mass,
            radius: self.radius,
            color: self.color.to_string(),
            is_star: self.is_star,
            is_moon: false,
            has_rings: self.has_rings,
            parent: None,
            max_trail_length: self.max_trail_length,
            orbit_radius: self.orbit_radius,
        }
    }
}

const fn planet(
    name: &'static str,
    distance: f64,
    speed: f64,
    mass: f64,
    radius: f64,
    color: &'static str,
    max_trail_length: usize,
) -> BodyPreset {
    BodyPreset {
        name,
        pos: DVec2::new(distance, 0.0),
        vel: DVec2::new(0.0, speed),
        mass,
        radius,
        color,
        max_trail_length,
        orbit_radius: Some(distance),
        is_star: false,
        has_rings: false,
    }
}

/// The Sun. Always first, so it is the anchor in simplified mode.
pub const SUN: BodyPreset = BodyPreset {
    name: "Sun",
    pos: DVec2::ZERO,
    vel: DVec2::ZERO,
    mass: 1000.0,
    radius: 20.0,
    color: "#FFD700",
    max_trail_length: 100,
    orbit_radius: None,
    is_star: true,
    has_rings: false,
};

/// Saturn, the only ringed planet.
pub const SATURN: BodyPreset = BodyPreset {
    has_rings: true,
    ..planet("Saturn", 550.0, 1.0, 40.0, 13.0, "#FAD5A5", 120)
};

/// Default layout: the Sun followed by the planets in order of distance.
pub static SOLAR_SYSTEM: &[BodyPreset] = &[
    SUN,
    planet("Mercury", 100.0, 2.5, 1.0, 4.0, "#8C7853", 50),
    planet("Venus", 150.0, 2.0, 2.0, 6.0, "#FFC649", 60),
    planet("Earth", 200.0, 1.8, 2.5, 7.0, "#4A90E2", 80),
    planet("Mars", 280.0, 1.5, 1.5, 5.0, "#CD5C5C", 70),
    planet("Jupiter", 400.0, 1.2, 50.0, 15.0, "#D8CA9D", 100),
    SATURN,
    planet("Uranus", 700.0, 0.8, 15.0, 10.0, "#4FD0E7", 100),
    planet("Neptune", 850.0, 0.7, 15.0, 9.0, "#4166F5", 100),
];
