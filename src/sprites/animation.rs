//! Animation parameters and the state derived from them.
//!
//! The motion controller writes four named flags; the state machine here
//! folds them into one `AnimationState` per character and tints the
//! placeholder sprite to match.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::movement::{AnimationFlag, AnimationFlags, AnimationSink};

/// Animator parameters of a character.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnimatorFlags(pub AnimationFlags);

impl AnimatorFlags {
    pub fn get(&self, flag: AnimationFlag) -> bool {
        self.0.get(flag)
    }
}

impl AnimationSink for AnimatorFlags {
    fn set_flag(&mut self, flag: AnimationFlag, value: bool) {
        self.0.set(flag, value);
    }
}

/// Animation states for characters.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Dash,
    WallCling,
}

impl AnimationState {
    /// Dash wins over wall contact, which wins over jumping, then running.
    pub fn from_flags(flags: &AnimationFlags) -> Self {
        if flags.dashing {
            AnimationState::Dash
        } else if flags.against_wall {
            AnimationState::WallCling
        } else if flags.jumping {
            AnimationState::Jump
        } else if flags.running {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    }

    /// Placeholder tint until sprite sheets exist.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Run => Color::srgb(0.85, 0.95, 0.85),
            AnimationState::Jump => Color::srgb(0.85, 0.85, 0.95),
            AnimationState::Dash => Color::srgb(0.95, 0.93, 0.6),
            AnimationState::WallCling => Color::srgb(0.95, 0.8, 0.8),
        }
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

pub fn animation_state_machine(
    mut query: Query<
        (Entity, &AnimatorFlags, &mut AnimationState, &mut Sprite),
        Changed<AnimatorFlags>,
    >,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, flags, mut state, mut sprite) in &mut query {
        let next = AnimationState::from_flags(&flags.0);
        if *state == next {
            continue;
        }

        debug!("Animation {:?} -> {:?} on {}", *state, next, entity);
        changed_events.write(AnimationStateChanged {
            entity,
            from: *state,
            to: next,
        });
        *state = next;
        sprite.color = next.tint();
    }
}
