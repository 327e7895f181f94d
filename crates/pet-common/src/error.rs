//! Error types for the PET estimation services.

use thiserror::Error;

use crate::CoordinateError;

/// Result type alias using PetError.
pub type PetResult<T> = Result<T, PetError>;

/// Service-level error type.
///
/// Library crates keep their own error enums and convert into this one at
/// the service boundary.
#[derive(Debug, Error)]
pub enum PetError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Model input out of range: {0}")]
    InputOutOfRange(String),

    // === Data Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No survey point with a valid coordinate is available")]
    NoSurveyPoints,

    #[error("Failed to read data: {0}")]
    DataReadError(String),

    // === Upstream Errors ===
    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("Model evaluation failed: {0}")]
    ModelError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Request timeout")]
    Timeout,
}

impl PetError {
    /// Stable machine-readable code for API error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            PetError::MissingParameter(_) => "MissingParameterValue",
            PetError::InvalidParameter { .. } => "InvalidParameterValue",
            PetError::InvalidCoordinate(_) => "InvalidCoordinate",
            PetError::InputOutOfRange(_) => "InputOutOfRange",
            PetError::NotFound(_) => "NotFound",
            PetError::NoSurveyPoints => "NoSurveyPoints",
            PetError::WeatherUnavailable(_) => "WeatherUnavailable",
            PetError::Timeout => "Timeout",
            _ => "NoApplicableCode",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            PetError::MissingParameter(_)
            | PetError::InvalidParameter { .. }
            | PetError::InvalidCoordinate(_)
            | PetError::InputOutOfRange(_) => 400,

            PetError::NotFound(_) => 404,

            PetError::NoSurveyPoints => 503,

            PetError::WeatherUnavailable(_) => 502,
            PetError::Timeout => 504,

            _ => 500,
        }
    }
}

impl From<std::io::Error> for PetError {
    fn from(err: std::io::Error) -> Self {
        PetError::DataReadError(err.to_string())
    }
}

impl From<serde_json::Error> for PetError {
    fn from(err: serde_json::Error) -> Self {
        PetError::InternalError(format!("JSON error: {}", err))
    }
}
