//! Movement domain: character motion controller, sensors and plugin wiring.

mod bootstrap;
mod collaborators;
mod components;
mod controller;
mod dev;
mod resources;
mod rig;
mod sensors;
mod systems;


pub use collaborators::{AnimationSink, AvianBody, FacingSink, PhysicsBody};
pub use components::{
    AnimationFlag, AnimationFlags, Facing, GameLayer, Ground, InputPhase, Player, SensorKind,
    Wall, WallContact,
};
pub use controller::{CharacterMotionController, MotionStep};
pub use resources::{AxisPhaseTracker, IntentMode, MotionTuning};
pub use rig::{ConfigurationError, ControllerRig, ResolvedRig};
pub use sensors::{ContactSensor, SensorFilter};
pub use systems::input::MotionInputEvent;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::rig::activate_controllers;
use crate::movement::systems::{
    advance_motion_timers, apply_motion_step, dispatch_input, read_input, route_sensor_contacts,
};

/// Ordering of the variable-rate motion systems within `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    Activate,
    Input,
    Contacts,
    Timers,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<AxisPhaseTracker>()
            .add_message::<MotionInputEvent>()
            .configure_sets(
                Update,
                (
                    MotionSet::Activate,
                    MotionSet::Input,
                    MotionSet::Contacts,
                    MotionSet::Timers,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, activate_controllers.in_set(MotionSet::Activate))
            .add_systems(
                Update,
                (read_input, dispatch_input)
                    .chain()
                    .in_set(MotionSet::Input),
            )
            .add_systems(Update, route_sensor_contacts.in_set(MotionSet::Contacts))
            .add_systems(Update, advance_motion_timers.in_set(MotionSet::Timers))
            .add_systems(FixedUpdate, apply_motion_step);
    }
}
