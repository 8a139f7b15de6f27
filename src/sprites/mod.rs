//! Sprites module: animator parameters and the animation state they drive.

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_systems(PostUpdate, animation_state_machine);
    }
}
