//! Error types for PET scoring.

use std::path::PathBuf;

use pet_common::PetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{feature} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        feature: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{feature} is not a finite number")]
    NotFinite { feature: &'static str },

    #[error("Failed to load model from {path:?}: {message}")]
    Load { path: PathBuf, message: String },
}

impl From<ModelError> for PetError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::OutOfRange { .. } | ModelError::NotFinite { .. } => {
                PetError::InputOutOfRange(err.to_string())
            }
            ModelError::Load { .. } => PetError::ModelError(err.to_string()),
        }
    }
}
