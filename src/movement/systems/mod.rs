//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::route_sensor_contacts;
pub(crate) use input::{dispatch_input, read_input};
pub(crate) use movement::{advance_motion_timers, apply_motion_step};
