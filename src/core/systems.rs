//! Core domain: startup systems.

use bevy::prelude::*;

use crate::core::PIXELS_PER_METER;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
