//! Error types for survey loading and resolution.

use std::path::PathBuf;

use pet_common::{CoordinateError, PetError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// No point with a valid coordinate is available.
    #[error("No survey point with a valid coordinate is available")]
    EmptyCandidateSet,

    #[error("Invalid query coordinate: {0}")]
    InvalidQuery(#[from] CoordinateError),

    #[error("Failed to read survey file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse survey file {path:?}: {message}")]
    Format { path: PathBuf, message: String },

    #[error("Unsupported survey file format: {0:?}. Expected .yaml, .yml or .json")]
    UnsupportedFormat(PathBuf),
}

impl From<SurveyError> for PetError {
    fn from(err: SurveyError) -> Self {
        match err {
            SurveyError::EmptyCandidateSet => PetError::NoSurveyPoints,
            SurveyError::InvalidQuery(e) => PetError::InvalidCoordinate(e),
            other => PetError::DataReadError(other.to_string()),
        }
    }
}
