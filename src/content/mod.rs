//! Content domain: data-driven tuning loaded from assets/data at startup.

mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use loader::{ContentLoadError, load_motion_tuning, parse_motion_tuning};
pub use validation::{TuningError, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MotionTuning;

pub(crate) const MOTION_TUNING_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Resolve tuning from disk, falling back to defaults on any problem.
pub fn resolve_motion_tuning(path: &Path) -> MotionTuning {
    let tuning = match load_motion_tuning(path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default motion tuning", e);
            return MotionTuning::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if errors.is_empty() {
        return tuning;
    }

    for error in &errors {
        warn!("Motion tuning validation error: {}", error);
    }
    warn!("Using default motion tuning");
    MotionTuning::default()
}

fn load_content(mut commands: Commands) {
    let tuning = resolve_motion_tuning(Path::new(MOTION_TUNING_PATH));
    info!("Motion tuning loaded: {:?}", tuning);
    commands.insert_resource(tuning);
}
