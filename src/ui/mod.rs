//! UI domain: in-game HUD elements.

mod hud_motion;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::ui::hud_motion::{spawn_motion_readout, update_motion_readout};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        if cfg!(feature = "dev-tools") {
            app.add_systems(Startup, spawn_motion_readout)
                .add_systems(Update, update_motion_readout);
        }
    }
}
