//! Movement domain: the engine services a motion controller talks to.
//!
//! The controller never reaches into the ECS on its own. Systems hand it
//! short-lived adapters over the physics body, the animator and the sprite.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimationFlag, Facing};

/// Rigid body the controller drives.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change in momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
}

/// Receiver of named boolean animation parameters.
pub trait AnimationSink {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool);
}

/// Visual side of facing (horizontal flip).
pub trait FacingSink {
    fn set_facing(&mut self, facing: Facing);
}

/// avian2d body borrowed for the duration of one controller call.
pub struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub gravity: &'a mut GravityScale,
    pub inverse_mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        gravity: &'a mut GravityScale,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            velocity,
            gravity,
            inverse_mass: mass.inverse(),
        }
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }
}

impl FacingSink for Sprite {
    fn set_facing(&mut self, facing: Facing) {
        self.flip_x = facing == Facing::Left;
    }
}
