//! Movement domain: the character motion state machine.
//!
//! Input handlers, contact edges and the two per-frame entry points
//! (`advance_time` on the variable-rate tick, `physics_step` on the fixed
//! tick) are the only places motion state changes.

use bevy::prelude::*;

use crate::movement::{
    AnimationFlag, AnimationFlags, AnimationSink, Facing, FacingSink, InputPhase, MotionTuning,
    PhysicsBody, SensorKind, WallContact,
};

/// Result of one fixed physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    pub velocity: Vec2,
    pub flags: AnimationFlags,
    pub facing: Facing,
    /// Whether a jump impulse was applied this step.
    pub jumped: bool,
}

#[derive(Component, Debug, Clone)]
pub struct CharacterMotionController {
    tuning: MotionTuning,
    horizontal_intent: f32,
    facing: Facing,
    grounded: bool,
    wall_contact: WallContact,
    left_wall_active: bool,
    right_wall_active: bool,
    jump_requested: bool,
    dash_time_remaining: f32,
    /// Zero means "dash the way the character faces".
    dash_direction: Vec2,
    last_non_zero_direction: Vec2,
    gravity_scale_baseline: f32,
    flags: AnimationFlags,
}

impl CharacterMotionController {
    pub fn new(gravity_scale_baseline: f32, tuning: MotionTuning) -> Self {
        Self {
            tuning,
            horizontal_intent: 0.0,
            facing: Facing::Right,
            grounded: false,
            wall_contact: WallContact::None,
            left_wall_active: false,
            right_wall_active: false,
            jump_requested: false,
            dash_time_remaining: 0.0,
            dash_direction: Vec2::ZERO,
            last_non_zero_direction: Vec2::ZERO,
            gravity_scale_baseline,
            flags: AnimationFlags::default(),
        }
    }

    pub fn is_dashing(&self) -> bool {
        self.dash_time_remaining > 0.0
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn wall_contact(&self) -> WallContact {
        self.wall_contact
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn horizontal_intent(&self) -> f32 {
        self.horizontal_intent
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    pub fn dash_time_remaining(&self) -> f32 {
        self.dash_time_remaining
    }

    pub fn dash_direction(&self) -> Vec2 {
        self.dash_direction
    }

    pub fn last_non_zero_direction(&self) -> Vec2 {
        self.last_non_zero_direction
    }

    pub fn gravity_scale_baseline(&self) -> f32 {
        self.gravity_scale_baseline
    }

    pub fn flags(&self) -> AnimationFlags {
        self.flags
    }

    /// Push the full flag set and facing to freshly attached collaborators.
    pub fn publish(&self, anim: &mut impl AnimationSink, facing: &mut impl FacingSink) {
        for flag in [
            AnimationFlag::IsRunning,
            AnimationFlag::IsJumping,
            AnimationFlag::IsDashing,
            AnimationFlag::IsAgainstWall,
        ] {
            anim.set_flag(flag, self.flags.get(flag));
        }
        facing.set_facing(self.facing);
    }

    pub fn on_movement_input(
        &mut self,
        vector: Vec2,
        phase: InputPhase,
        anim: &mut impl AnimationSink,
        facing: &mut impl FacingSink,
    ) {
        let vector = if phase == InputPhase::Canceled {
            Vec2::ZERO
        } else {
            vector
        };

        if vector != Vec2::ZERO {
            self.last_non_zero_direction = vector.normalize_or_zero();
        }
        self.horizontal_intent = self.tuning.intent_from_axis(vector.x);
        self.resolve_facing(facing);
        self.write_flag(anim, AnimationFlag::IsRunning, self.horizontal_intent != 0.0);
    }

    /// Latch a jump for the next physics step. Returns whether it was accepted.
    pub fn on_jump_input(&mut self, phase: InputPhase) -> bool {
        if phase != InputPhase::Started || self.is_dashing() || !self.grounded {
            return false;
        }
        self.jump_requested = true;
        true
    }

    /// Begin a dash. Returns whether a dash started.
    pub fn on_dash_input(
        &mut self,
        phase: InputPhase,
        body: &mut impl PhysicsBody,
        anim: &mut impl AnimationSink,
    ) -> bool {
        if phase != InputPhase::Started || self.is_dashing() {
            return false;
        }

        self.dash_direction = self.resolve_dash_direction();
        self.dash_time_remaining = self.tuning.dash_duration;
        body.set_gravity_scale(0.0);
        self.write_flag(anim, AnimationFlag::IsDashing, true);
        debug!(
            "Dash started: direction={:?}, grounded={}, wall={:?}",
            self.dash_direction, self.grounded, self.wall_contact
        );
        true
    }

    /// Variable-rate tick. Returns true when the dash ended during this call.
    pub fn advance_time(
        &mut self,
        delta_secs: f32,
        body: &mut impl PhysicsBody,
        anim: &mut impl AnimationSink,
    ) -> bool {
        if !self.is_dashing() {
            return false;
        }

        self.dash_time_remaining = (self.dash_time_remaining - delta_secs.max(0.0)).max(0.0);
        if self.is_dashing() {
            return false;
        }

        self.write_flag(anim, AnimationFlag::IsDashing, false);
        body.set_gravity_scale(self.gravity_scale_baseline);
        debug!(
            "Dash ended: gravity scale restored to {}",
            self.gravity_scale_baseline
        );
        true
    }

    /// Fixed-rate tick: write velocity, apply a latched jump, refresh facing.
    pub fn physics_step(
        &mut self,
        body: &mut impl PhysicsBody,
        anim: &mut impl AnimationSink,
        facing: &mut impl FacingSink,
    ) -> MotionStep {
        let mut jumped = false;

        if self.is_dashing() {
            let direction = if self.dash_direction == Vec2::ZERO {
                self.facing.unit()
            } else {
                self.dash_direction
            };
            body.set_velocity(direction * self.tuning.dash_speed);
            // A jump latched before the dash began has no ground to leave from.
            self.jump_requested = false;
        } else {
            let vertical = body.velocity().y;
            body.set_velocity(Vec2::new(
                self.horizontal_intent * self.tuning.move_speed,
                vertical,
            ));
            self.resolve_facing(facing);

            if self.jump_requested {
                body.apply_impulse(Vec2::Y * self.tuning.jump_impulse);
                self.grounded = false;
                self.jump_requested = false;
                self.write_flag(anim, AnimationFlag::IsJumping, true);
                jumped = true;
            }
        }

        MotionStep {
            velocity: body.velocity(),
            flags: self.flags,
            facing: self.facing,
            jumped,
        }
    }

    /// Contact edges can change which way the character must face, so the
    /// facing is re-resolved on every edge.
    pub fn on_contact_begin(
        &mut self,
        sensor: SensorKind,
        anim: &mut impl AnimationSink,
        facing: &mut impl FacingSink,
    ) {
        match sensor {
            SensorKind::Ground => {
                self.write_flag(anim, AnimationFlag::IsJumping, false);
                self.grounded = true;
                debug!("Landed");
            }
            SensorKind::WallLeft => {
                self.left_wall_active = true;
                self.set_wall_contact(WallContact::Left, anim);
            }
            SensorKind::WallRight => {
                self.right_wall_active = true;
                self.set_wall_contact(WallContact::Right, anim);
            }
        }
        self.resolve_facing(facing);
    }

    pub fn on_contact_end(
        &mut self,
        sensor: SensorKind,
        anim: &mut impl AnimationSink,
        facing: &mut impl FacingSink,
    ) {
        match sensor {
            SensorKind::Ground => {
                self.grounded = false;
                debug!("Left ground");
            }
            SensorKind::WallLeft => {
                self.left_wall_active = false;
                let remaining = if self.right_wall_active {
                    WallContact::Right
                } else {
                    WallContact::None
                };
                self.set_wall_contact(remaining, anim);
            }
            SensorKind::WallRight => {
                self.right_wall_active = false;
                let remaining = if self.left_wall_active {
                    WallContact::Left
                } else {
                    WallContact::None
                };
                self.set_wall_contact(remaining, anim);
            }
        }
        self.resolve_facing(facing);
    }

    fn set_wall_contact(&mut self, contact: WallContact, anim: &mut impl AnimationSink) {
        if contact != self.wall_contact {
            debug!("Wall contact: {:?} -> {:?}", self.wall_contact, contact);
        }
        self.wall_contact = contact;
        self.write_flag(anim, AnimationFlag::IsAgainstWall, contact.is_touching());
    }

    fn resolve_dash_direction(&self) -> Vec2 {
        if self.grounded {
            return self.last_non_zero_direction;
        }
        match self.wall_contact {
            WallContact::Left => Vec2::X,
            WallContact::Right => Vec2::NEG_X,
            WallContact::None => self.last_non_zero_direction,
        }
    }

    /// Airborne against a wall the character faces away from it; otherwise
    /// it faces the sign of its intent, keeping the old facing at zero.
    fn resolve_facing(&mut self, sink: &mut impl FacingSink) {
        let wall_facing = if self.grounded {
            None
        } else {
            self.wall_contact.away_facing()
        };
        let next = wall_facing
            .or_else(|| Facing::from_sign(self.horizontal_intent))
            .unwrap_or(self.facing);

        if next != self.facing {
            self.facing = next;
            sink.set_facing(next);
        }
    }

    fn write_flag(&mut self, anim: &mut impl AnimationSink, flag: AnimationFlag, value: bool) {
        self.flags.set(flag, value);
        anim.set_flag(flag, value);
    }
}
