//! UI domain: tests for the motion readout text.

use bevy::prelude::Sprite;

use super::hud_motion::describe_motion;
use crate::movement::{CharacterMotionController, MotionTuning, SensorKind};
use crate::sprites::AnimatorFlags;

#[test]
fn test_readout_reflects_controller_state() {
    let mut controller = CharacterMotionController::new(1.0, MotionTuning::default());
    let mut animator = AnimatorFlags::default();
    let mut sprite = Sprite::default();
    controller.on_contact_begin(SensorKind::Ground, &mut animator, &mut sprite);
    controller.on_contact_begin(SensorKind::WallLeft, &mut animator, &mut sprite);

    let text = describe_motion(&controller);
    assert!(text.contains("grounded: true"));
    assert!(text.contains("wall: Left"));
    assert!(text.contains("IsAgainstWall: true"));
    assert!(text.contains("dash: 0.00s"));
}
