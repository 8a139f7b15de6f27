//! Content domain: tests for tuning parsing, validation and fallback.

use std::path::Path;

use super::{
    ContentLoadError, TuningError, parse_motion_tuning, resolve_motion_tuning, validate_tuning,
};
use crate::movement::{IntentMode, MotionTuning};

#[test]
fn test_parse_full_tuning() {
    let tuning = parse_motion_tuning(
        r#"(
            move_speed: 4.0,
            jump_impulse: 5.0,
            dash_speed: 9.0,
            dash_duration: 0.25,
            intent_mode: Quantized,
        )"#,
        "inline",
    )
    .unwrap();

    assert_eq!(tuning.move_speed, 4.0);
    assert_eq!(tuning.jump_impulse, 5.0);
    assert_eq!(tuning.dash_speed, 9.0);
    assert_eq!(tuning.dash_duration, 0.25);
    assert_eq!(tuning.intent_mode, IntentMode::Quantized);
}

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_motion_tuning("(dash_speed: 6.0)", "inline").unwrap();
    assert_eq!(tuning.dash_speed, 6.0);
    assert_eq!(
        tuning,
        MotionTuning {
            dash_speed: 6.0,
            ..MotionTuning::default()
        }
    );
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_motion_tuning("(dash_speed: fast)", "movement.ron").unwrap_err();
    assert!(matches!(err, ContentLoadError::Parse { ref path, .. } if path == "movement.ron"));
    assert!(err.to_string().contains("movement.ron"));
}

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&MotionTuning::default()).is_empty());
}

#[test]
fn test_validation_reports_each_bad_field() {
    let tuning = MotionTuning {
        dash_duration: 0.0,
        move_speed: f32::NAN,
        ..MotionTuning::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 2);
    assert!(matches!(
        errors[0],
        TuningError::NotFinite {
            field: "move_speed",
            ..
        }
    ));
    assert_eq!(
        errors[1],
        TuningError::NotPositive {
            field: "dash_duration",
            value: 0.0
        }
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let tuning = resolve_motion_tuning(Path::new("does/not/exist/movement.ron"));
    assert_eq!(tuning, MotionTuning::default());
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::MOTION_TUNING_PATH);
    let tuning = super::load_motion_tuning(&path).unwrap();
    assert!(validate_tuning(&tuning).is_empty());
}
