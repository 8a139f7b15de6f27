//! Movement domain: routing sensor contact edges to controllers.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{CharacterMotionController, ContactSensor, Ground, Wall};
use crate::sprites::AnimatorFlags;

/// Pick out which collider of a pair is a sensor, returning `(sensor, other)`.
fn sensor_pair(
    sensors: &Query<&mut ContactSensor>,
    collider1: Entity,
    collider2: Entity,
) -> Option<(Entity, Entity)> {
    if sensors.contains(collider1) {
        Some((collider1, collider2))
    } else if sensors.contains(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}

pub(crate) fn route_sensor_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut sensors: Query<&mut ContactSensor>,
    surfaces: Query<(), Or<(With<Ground>, With<Wall>)>>,
    mut characters: Query<(&mut CharacterMotionController, &mut AnimatorFlags, &mut Sprite)>,
) {
    for event in collision_start_events.read() {
        let Some((sensor_entity, other)) =
            sensor_pair(&sensors, event.collider1, event.collider2)
        else {
            continue;
        };
        let Ok(mut sensor) = sensors.get_mut(sensor_entity) else {
            continue;
        };
        if !sensor.begin(other, surfaces.contains(other)) {
            continue;
        }

        debug!("{:?} sensor contact began with {}", sensor.kind, other);
        if let Ok((mut controller, mut animator, mut sprite)) =
            characters.get_mut(sensor.owner)
        {
            controller.on_contact_begin(sensor.kind, &mut *animator, &mut *sprite);
        }
    }

    for event in collision_end_events.read() {
        let Some((sensor_entity, other)) =
            sensor_pair(&sensors, event.collider1, event.collider2)
        else {
            continue;
        };
        let Ok(mut sensor) = sensors.get_mut(sensor_entity) else {
            continue;
        };
        if !sensor.end(other) {
            continue;
        }

        debug!("{:?} sensor contact ended", sensor.kind);
        if let Ok((mut controller, mut animator, mut sprite)) =
            characters.get_mut(sensor.owner)
        {
            controller.on_contact_end(sensor.kind, &mut *animator, &mut *sprite);
        }
    }
}
