//! Movement domain: controller rig wiring and activation.
//!
//! A character names its sensors up front through `ControllerRig`. The
//! activation system checks every collaborator is present before any
//! controller exists, and a missing one stops the app.

use avian2d::prelude::*;
use bevy::prelude::*;
use thiserror::Error;

use crate::movement::{CharacterMotionController, ContactSensor, MotionTuning, SensorKind};
use crate::sprites::AnimatorFlags;

/// A required collaborator is absent when a controller is activated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{0:?} sensor needs to be assigned on the controller rig")]
    MissingSensor(SensorKind),

    #[error("sensor {entity} is assigned as {expected:?} but is a {found:?} sensor")]
    SensorKindMismatch {
        entity: Entity,
        expected: SensorKind,
        found: SensorKind,
    },

    #[error("character body is missing its {0} component")]
    MissingBody(&'static str),

    #[error("character is missing its animator")]
    MissingAnimator,

    #[error("character is missing its sprite")]
    MissingSprite,
}

/// Sensor handles injected into a character's controller.
#[derive(Component, Debug, Clone, Default)]
pub struct ControllerRig {
    pub ground_sensor: Option<Entity>,
    pub left_wall_sensor: Option<Entity>,
    pub right_wall_sensor: Option<Entity>,
}

/// A rig whose sensors all exist and match their slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRig {
    pub ground_sensor: Entity,
    pub left_wall_sensor: Entity,
    pub right_wall_sensor: Entity,
}

impl ResolvedRig {
    pub fn sensors(&self) -> [(SensorKind, Entity); 3] {
        [
            (SensorKind::Ground, self.ground_sensor),
            (SensorKind::WallLeft, self.left_wall_sensor),
            (SensorKind::WallRight, self.right_wall_sensor),
        ]
    }
}

impl ControllerRig {
    pub fn slot(&self, kind: SensorKind) -> Option<Entity> {
        match kind {
            SensorKind::Ground => self.ground_sensor,
            SensorKind::WallLeft => self.left_wall_sensor,
            SensorKind::WallRight => self.right_wall_sensor,
        }
    }

    /// Check every slot against `lookup`, which reports the kind of the
    /// sensor living on an entity (or `None` when there is no sensor).
    pub fn resolve(
        &self,
        lookup: impl Fn(Entity) -> Option<SensorKind>,
    ) -> Result<ResolvedRig, ConfigurationError> {
        let check = |expected: SensorKind| -> Result<Entity, ConfigurationError> {
            let entity = self
                .slot(expected)
                .ok_or(ConfigurationError::MissingSensor(expected))?;
            let found = lookup(entity).ok_or(ConfigurationError::MissingSensor(expected))?;
            if found != expected {
                return Err(ConfigurationError::SensorKindMismatch {
                    entity,
                    expected,
                    found,
                });
            }
            Ok(entity)
        };

        Ok(ResolvedRig {
            ground_sensor: check(SensorKind::Ground)?,
            left_wall_sensor: check(SensorKind::WallLeft)?,
            right_wall_sensor: check(SensorKind::WallRight)?,
        })
    }
}

type RigQueryData = (
    Entity,
    &'static ControllerRig,
    Option<&'static GravityScale>,
    Has<LinearVelocity>,
    Has<ComputedMass>,
    Option<&'static mut AnimatorFlags>,
    Option<&'static mut Sprite>,
);

/// Build a controller for every rigged character that does not have one yet.
pub(crate) fn activate_controllers(
    mut commands: Commands,
    tuning: Res<MotionTuning>,
    sensors: Query<&ContactSensor>,
    mut rigs: Query<RigQueryData, Without<CharacterMotionController>>,
) -> Result {
    for (entity, rig, gravity, has_velocity, has_mass, animator, sprite) in &mut rigs {
        let resolved = rig.resolve(|sensor| sensors.get(sensor).ok().map(|s| s.kind))?;

        let gravity = gravity.ok_or(ConfigurationError::MissingBody("GravityScale"))?;
        if !has_velocity {
            return Err(ConfigurationError::MissingBody("LinearVelocity").into());
        }
        if !has_mass {
            return Err(ConfigurationError::MissingBody("ComputedMass").into());
        }
        let mut animator = animator.ok_or(ConfigurationError::MissingAnimator)?;
        let mut sprite = sprite.ok_or(ConfigurationError::MissingSprite)?;

        let mut controller = CharacterMotionController::new(gravity.0, tuning.clone());

        // Sensors may already overlap something before the controller exists.
        for (kind, sensor_entity) in resolved.sensors() {
            if sensors.get(sensor_entity).is_ok_and(|s| s.is_active()) {
                controller.on_contact_begin(kind, &mut *animator, &mut *sprite);
            }
        }
        controller.publish(&mut *animator, &mut *sprite);

        info!(
            "Activated motion controller on {}: gravity_scale={}, grounded={}, wall={:?}",
            entity,
            gravity.0,
            controller.is_grounded(),
            controller.wall_contact()
        );
        commands.entity(entity).insert(controller);
    }

    Ok(())
}
