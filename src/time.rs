//! Frame-driven stepping for Bevy apps.
//!
//! The engine itself has no notion of wall-clock time; this plugin calls
//! [`Engine::tick`] once per `Update`, i.e. once per rendered frame.

use bevy::prelude::*;

use crate::engine::Engine;

/// Plugin that owns an [`Engine`] resource and ticks it every frame.
///
/// An engine inserted before the plugin is kept; otherwise the default
/// solar-system engine is created.
pub struct TickPlugin;

impl Plugin for TickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Engine>()
            .add_systems(Update, advance_engine);
    }
}

/// Advance the engine by one tick. Pausing is handled inside the engine.
fn advance_engine(mut engine: ResMut<Engine>) {
    engine.tick();
}
