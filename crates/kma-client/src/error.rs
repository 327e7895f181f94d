//! Error types for KMA requests.

use pet_common::PetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KmaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The API answered with a non-success result code.
    #[error("KMA API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Failed to decode KMA response: {0}")]
    Decode(String),

    #[error("Missing category in KMA response: {0}")]
    MissingCategory(&'static str),

    #[error("Invalid value for category {category}: '{value}'")]
    InvalidValue { category: String, value: String },
}

impl KmaError {
    /// Classify a transport error, separating timeouts.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KmaError::Timeout
        } else {
            KmaError::Http(err)
        }
    }
}

impl From<KmaError> for PetError {
    fn from(err: KmaError) -> Self {
        match err {
            KmaError::Timeout => PetError::Timeout,
            other => PetError::WeatherUnavailable(other.to_string()),
        }
    }
}
