//! Movement domain: keyboard sampling and input dispatch.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    AvianBody, AxisPhaseTracker, CharacterMotionController, InputPhase, Player,
};
use crate::sprites::AnimatorFlags;

/// Phased input action aimed at the player's controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionInputEvent {
    Move { vector: Vec2, phase: InputPhase },
    Jump(InputPhase),
    Dash(InputPhase),
}

impl Message for MotionInputEvent {}

fn button_phase(keyboard: &ButtonInput<KeyCode>, keys: [KeyCode; 2]) -> Option<InputPhase> {
    if keyboard.any_just_pressed(keys) {
        Some(InputPhase::Started)
    } else if keyboard.any_just_released(keys) && !keyboard.any_pressed(keys) {
        Some(InputPhase::Canceled)
    } else {
        None
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tracker: ResMut<AxisPhaseTracker>,
    mut events: MessageWriter<MotionInputEvent>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis only feeds dash direction
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let axis = Vec2::new(x, y);
    if let Some(phase) = tracker.sample(axis) {
        events.write(MotionInputEvent::Move {
            vector: axis,
            phase,
        });
    }

    if let Some(phase) = button_phase(&keyboard, [KeyCode::Space, KeyCode::KeyK]) {
        events.write(MotionInputEvent::Jump(phase));
    }
    if let Some(phase) = button_phase(&keyboard, [KeyCode::ShiftLeft, KeyCode::KeyJ]) {
        events.write(MotionInputEvent::Dash(phase));
    }
}

pub(crate) fn dispatch_input(
    mut events: MessageReader<MotionInputEvent>,
    mut query: Query<
        (
            &mut CharacterMotionController,
            &mut AnimatorFlags,
            &mut Sprite,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    for event in events.read() {
        for (mut controller, mut animator, mut sprite, mut velocity, mut gravity, mass) in
            &mut query
        {
            match *event {
                MotionInputEvent::Move { vector, phase } => {
                    controller.on_movement_input(vector, phase, &mut *animator, &mut *sprite);
                }
                MotionInputEvent::Jump(phase) => {
                    controller.on_jump_input(phase);
                }
                MotionInputEvent::Dash(phase) => {
                    let mut body = AvianBody::new(&mut velocity, &mut gravity, mass);
                    controller.on_dash_input(phase, &mut body, &mut *animator);
                }
            }
        }
    }
}
