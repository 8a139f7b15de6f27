//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::InputPhase;

/// How raw horizontal input becomes movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum IntentMode {
    /// Pass the analog axis value through unchanged.
    #[default]
    Analog,
    /// Snap the axis value to -1, 0 or 1.
    Quantized,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    /// Horizontal speed multiplier applied to the intent.
    pub move_speed: f32,
    /// Vertical impulse applied on jump.
    pub jump_impulse: f32,
    pub dash_speed: f32,
    /// Dash length in seconds.
    pub dash_duration: f32,
    pub intent_mode: IntentMode,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            jump_impulse: 3.5,
            dash_speed: 3.0,
            dash_duration: 0.5,
            intent_mode: IntentMode::Analog,
        }
    }
}

impl MotionTuning {
    /// Convert a raw horizontal axis value into intent.
    pub fn intent_from_axis(&self, x: f32) -> f32 {
        match self.intent_mode {
            IntentMode::Analog => x.clamp(-1.0, 1.0),
            IntentMode::Quantized => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
        }
    }
}

/// Last sampled movement axis, used to derive input phases.
#[derive(Resource, Debug, Default)]
pub struct AxisPhaseTracker {
    last_axis: Vec2,
}

impl AxisPhaseTracker {
    /// Record a new axis sample and report the phase transition it causes, if any.
    pub fn sample(&mut self, axis: Vec2) -> Option<InputPhase> {
        let previous = std::mem::replace(&mut self.last_axis, axis);
        match (previous == Vec2::ZERO, axis == Vec2::ZERO) {
            (true, true) => None,
            (true, false) => Some(InputPhase::Started),
            (false, true) => Some(InputPhase::Canceled),
            (false, false) if previous != axis => Some(InputPhase::Performed),
            (false, false) => None,
        }
    }
}
