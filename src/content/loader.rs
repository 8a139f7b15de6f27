//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::movement::MotionTuning;

/// Error type for content loading failures.
#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("Failed to read {path}: {details}")]
    Read { path: String, details: String },

    #[error("Failed to parse {path}: {details}")]
    Parse { path: String, details: String },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse motion tuning from RON text. Fields left out keep their defaults.
pub fn parse_motion_tuning(contents: &str, file: &str) -> Result<MotionTuning, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError::Parse {
            path: file.to_string(),
            details: e.to_string(),
        })
}

/// Load motion tuning from a RON file.
pub fn load_motion_tuning(path: &Path) -> Result<MotionTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError::Read {
        path: file_name.clone(),
        details: e.to_string(),
    })?;

    parse_motion_tuning(&contents, &file_name)
}
