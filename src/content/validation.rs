//! Validation for loaded tuning values.

use thiserror::Error;

use crate::movement::MotionTuning;

/// A tuning value that would break the controller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TuningError {
    #[error("'{field}' must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("'{field}' must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Validate every tuning field.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &MotionTuning) -> Vec<TuningError> {
    let fields = [
        ("move_speed", tuning.move_speed),
        ("jump_impulse", tuning.jump_impulse),
        ("dash_speed", tuning.dash_speed),
        ("dash_duration", tuning.dash_duration),
    ];

    fields
        .into_iter()
        .filter_map(|(field, value)| {
            if !value.is_finite() {
                Some(TuningError::NotFinite { field, value })
            } else if value <= 0.0 {
                Some(TuningError::NotPositive { field, value })
            } else {
                None
            }
        })
        .collect()
}
