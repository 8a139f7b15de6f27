//! Movement domain: dev test room for trying out movement.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    color: Color,
    layers: CollisionLayers,
    center: Vec2,
    size: Vec2,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(
        GameLayer::Ground,
        [GameLayer::Player, GameLayer::Sensor],
    );
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Sensor]);

    // Ground
    spawn_block(
        &mut commands,
        Ground,
        ground_color,
        ground_layers,
        Vec2::new(0.0, -3.0),
        Vec2::new(13.0, 0.6),
    );

    // Side walls
    for x in [-6.8, 6.8] {
        spawn_block(
            &mut commands,
            Wall,
            wall_color,
            wall_layers,
            Vec2::new(x, 0.8),
            Vec2::new(0.6, 8.0),
        );
    }

    // Platforms, low left then higher right
    spawn_block(
        &mut commands,
        Ground,
        platform_color,
        ground_layers,
        Vec2::new(-3.9, -1.5),
        Vec2::new(2.4, 0.3),
    );
    spawn_block(
        &mut commands,
        Ground,
        platform_color,
        ground_layers,
        Vec2::new(3.9, -0.3),
        Vec2::new(2.4, 0.3),
    );

    // Pillar for wall dashing practice
    spawn_block(
        &mut commands,
        Wall,
        wall_color,
        wall_layers,
        Vec2::new(-1.6, -1.2),
        Vec2::new(0.5, 3.0),
    );
}
