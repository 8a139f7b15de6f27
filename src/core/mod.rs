//! Core domain: camera and world scale.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// World units are metres; this many screen pixels make one metre.
pub const PIXELS_PER_METER: f32 = 64.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.08, 0.08, 0.12)))
            .add_systems(Startup, setup_camera);
    }
}
