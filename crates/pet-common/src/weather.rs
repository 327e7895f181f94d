//! Weather observations used as PET model inputs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::GridCell;

/// Current surface weather at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature (°C)
    pub air_temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Grid cell the values were requested for
    pub cell: GridCell,
    /// Provider base date/time of the observation or forecast run (KST)
    pub base_time: NaiveDateTime,
    /// Time the values apply to (KST); equals `base_time` for observations
    pub valid_time: NaiveDateTime,
}
