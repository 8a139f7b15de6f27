//! Movement domain: player spawn with its sensor rig.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactSensor, ControllerRig, GameLayer, Player, SensorFilter, SensorKind,
};
use crate::sprites::{AnimationState, AnimatorFlags};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);
/// Fixed body mass, so a jump impulse of N gives N m/s of lift.
pub(crate) const PLAYER_MASS: f32 = 1.0;
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Thickness of the sensor strips around the body.
const SENSOR_DEPTH: f32 = 0.08;

pub(crate) fn spawn_player(mut commands: Commands) {
    let player = commands
        .spawn((
            Player,
            AnimatorFlags::default(),
            AnimationState::default(),
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(PLAYER_SPAWN),
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                Mass(PLAYER_MASS),
                NoAutoMass,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .id();

    let half = PLAYER_SIZE * 0.5;
    let ground_sensor = spawn_sensor(
        &mut commands,
        player,
        SensorKind::Ground,
        Vec2::new(0.0, -half.y),
        Vec2::new(PLAYER_SIZE.x * 0.8, SENSOR_DEPTH),
    );
    let left_wall_sensor = spawn_sensor(
        &mut commands,
        player,
        SensorKind::WallLeft,
        Vec2::new(-half.x, 0.05),
        Vec2::new(SENSOR_DEPTH, PLAYER_SIZE.y * 0.7),
    );
    let right_wall_sensor = spawn_sensor(
        &mut commands,
        player,
        SensorKind::WallRight,
        Vec2::new(half.x, 0.05),
        Vec2::new(SENSOR_DEPTH, PLAYER_SIZE.y * 0.7),
    );

    commands.entity(player).insert(ControllerRig {
        ground_sensor: Some(ground_sensor),
        left_wall_sensor: Some(left_wall_sensor),
        right_wall_sensor: Some(right_wall_sensor),
    });

    info!(
        "Spawned player {} with sensors ground={}, left={}, right={}",
        player, ground_sensor, left_wall_sensor, right_wall_sensor
    );
}

fn spawn_sensor(
    commands: &mut Commands,
    owner: Entity,
    kind: SensorKind,
    offset: Vec2,
    size: Vec2,
) -> Entity {
    commands
        .spawn((
            ContactSensor::new(kind, owner, SensorFilter::Surface),
            ChildOf(owner),
            Transform::from_translation(offset.extend(0.0)),
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Ground, GameLayer::Wall]),
        ))
        .id()
}
