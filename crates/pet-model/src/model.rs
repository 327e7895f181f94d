//! The model seam.

use serde::Serialize;

use crate::{ModelError, PetFeatures};

/// Per-feature breakdown of a linear prediction.
///
/// `intercept` plus every feature term equals the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contributions {
    pub intercept: f64,
    pub svf: f64,
    pub gvi: f64,
    pub bvi: f64,
    pub air_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl Contributions {
    pub fn total(&self) -> f64 {
        self.intercept
            + self.svf
            + self.gvi
            + self.bvi
            + self.air_temperature
            + self.humidity
            + self.wind_speed
    }
}

/// Model output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PetEstimate {
    /// Predicted PET (°C)
    pub pet: f64,
    /// Only linear models provide a breakdown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Contributions>,
}

/// A PET regression model.
///
/// Implementations must be pure: the same features always give the same
/// estimate. Range validation is the caller's concern (see
/// [`crate::InputRanges`]).
pub trait PetModel: Send + Sync {
    /// Short identifier reported in API responses.
    fn name(&self) -> &str;

    fn predict(&self, features: &PetFeatures) -> Result<PetEstimate, ModelError>;
}
