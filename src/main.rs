//! Orrery - Gravitational Body Sandbox
//!
//! Headless run of the default solar system with merging collisions,
//! logging a summary of the system at a fixed frame interval.

use bevy::log::LogPlugin;
use bevy::prelude::*;

use orrery::physics::{center_of_mass, total_kinetic_energy, total_momentum};
use orrery::time::TickPlugin;
use orrery::{CollisionMode, Engine, SimulationConfig};

/// Frames to simulate before exiting.
const FRAMES: u32 = 3600;

/// Frames between summary lines.
const REPORT_EVERY: u32 = 600;

fn main() {
    let config = SimulationConfig::default().with_collision_mode(CollisionMode::Merge);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Insert the engine before the plugin so it is not replaced by the default
        .insert_resource(Engine::solar_system(config))
        .add_plugins(TickPlugin);

    for frame in 1..=FRAMES {
        app.update();
        if frame % REPORT_EVERY == 0 {
            report(app.world().resource::<Engine>());
        }
    }
}

fn report(engine: &Engine) {
    let bodies = engine.list_bodies();
    let momentum = total_momentum(bodies);
    let com = center_of_mass(bodies).unwrap_or_default();

    info!(
        "t={:.1} bodies={} momentum=({:.4}, {:.4}) KE={:.4} COM=({:.2}, {:.2})",
        engine.elapsed(),
        bodies.len(),
        momentum.x,
        momentum.y,
        total_kinetic_energy(bodies),
        com.x,
        com.y,
    );

    if let Some(collision) = engine.last_collision() {
        let (a, b) = collision.bodies();
        info!("last collision: {} and {}", a, b);
    }
}
