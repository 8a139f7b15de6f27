//! Movement domain: per-frame timers and the fixed physics step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AvianBody, CharacterMotionController};
use crate::sprites::AnimatorFlags;

type DrivenBody = (
    &'static mut CharacterMotionController,
    &'static mut AnimatorFlags,
    &'static mut LinearVelocity,
    &'static mut GravityScale,
    &'static ComputedMass,
);

/// Variable-rate tick: counts the dash down.
pub(crate) fn advance_motion_timers(time: Res<Time>, mut query: Query<DrivenBody>) {
    let dt = time.delta_secs();

    for (mut controller, mut animator, mut velocity, mut gravity, mass) in &mut query {
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass);
        controller.advance_time(dt, &mut body, &mut *animator);
    }
}

/// Fixed-rate tick: writes velocity and applies latched jumps.
pub(crate) fn apply_motion_step(mut query: Query<(Entity, DrivenBody, &mut Sprite)>) {
    for (entity, (mut controller, mut animator, mut velocity, mut gravity, mass), mut sprite) in
        &mut query
    {
        let mut body = AvianBody::new(&mut velocity, &mut gravity, mass);
        let step = controller.physics_step(&mut body, &mut *animator, &mut *sprite);
        if step.jumped {
            debug!(
                "{} jumped: velocity={:?}, facing={:?}",
                entity, step.velocity, step.facing
            );
        }
    }
}
