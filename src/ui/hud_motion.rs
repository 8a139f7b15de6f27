//! UI domain: motion state readout for the player.

use bevy::prelude::*;

use crate::movement::{CharacterMotionController, Player};

pub(crate) const MOTION_READOUT_PADDING: f32 = 16.0;

/// Marker for the motion readout text
#[derive(Component)]
pub struct MotionReadoutText;

pub(crate) fn spawn_motion_readout(mut commands: Commands) {
    commands.spawn((
        MotionReadoutText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(MOTION_READOUT_PADDING),
            top: Val::Px(MOTION_READOUT_PADDING),
            ..default()
        },
    ));
}

/// Multi-line summary of a controller's state.
pub(crate) fn describe_motion(controller: &CharacterMotionController) -> String {
    let flags = controller.flags();
    format!(
        "grounded: {}\nwall: {:?}\nfacing: {:?}\ndash: {:.2}s\n\
         IsRunning: {}  IsJumping: {}  IsDashing: {}  IsAgainstWall: {}",
        controller.is_grounded(),
        controller.wall_contact(),
        controller.facing(),
        controller.dash_time_remaining(),
        flags.running,
        flags.jumping,
        flags.dashing,
        flags.against_wall,
    )
}

pub(crate) fn update_motion_readout(
    player_query: Query<
        &CharacterMotionController,
        (With<Player>, Changed<CharacterMotionController>),
    >,
    mut text_query: Query<&mut Text, With<MotionReadoutText>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    for mut text in &mut text_query {
        **text = describe_motion(controller);
    }
}
