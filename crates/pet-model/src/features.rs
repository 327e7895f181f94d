//! Model input features and their accepted ranges.

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// The six model inputs, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Svf,
    Gvi,
    Bvi,
    AirTemperature,
    Humidity,
    WindSpeed,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Svf,
        Feature::Gvi,
        Feature::Bvi,
        Feature::AirTemperature,
        Feature::Humidity,
        Feature::WindSpeed,
    ];

    /// Field name used in JSON bodies and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Svf => "svf",
            Feature::Gvi => "gvi",
            Feature::Bvi => "bvi",
            Feature::AirTemperature => "air_temperature",
            Feature::Humidity => "humidity",
            Feature::WindSpeed => "wind_speed",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Model input vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PetFeatures {
    /// Sky View Factor (0-1)
    pub svf: f64,
    /// Green View Index (0-1)
    pub gvi: f64,
    /// Building View Index (0-1)
    pub bvi: f64,
    /// Air temperature (°C)
    #[serde(alias = "airtemperature", alias = "AirTemperature")]
    pub air_temperature: f64,
    /// Relative humidity (%)
    #[serde(alias = "Humidity")]
    pub humidity: f64,
    /// Wind speed (m/s)
    #[serde(alias = "windspeed", alias = "WindSpeed")]
    pub wind_speed: f64,
}

impl PetFeatures {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Svf => self.svf,
            Feature::Gvi => self.gvi,
            Feature::Bvi => self.bvi,
            Feature::AirTemperature => self.air_temperature,
            Feature::Humidity => self.humidity,
            Feature::WindSpeed => self.wind_speed,
        }
    }

    /// Values in model order.
    pub fn to_array(&self) -> [f64; 6] {
        Feature::ALL.map(|f| self.get(f))
    }
}

/// Inclusive bounds for one feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Accepted input ranges for manual predictions.
///
/// The defaults match the span of the survey the models were fitted on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    pub svf: FeatureRange,
    pub gvi: FeatureRange,
    pub bvi: FeatureRange,
    pub air_temperature: FeatureRange,
    pub humidity: FeatureRange,
    pub wind_speed: FeatureRange,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            svf: FeatureRange::new(0.0, 1.0),
            gvi: FeatureRange::new(0.0, 1.0),
            bvi: FeatureRange::new(0.0, 1.0),
            air_temperature: FeatureRange::new(10.0, 40.0),
            humidity: FeatureRange::new(10.0, 100.0),
            wind_speed: FeatureRange::new(0.0, 10.0),
        }
    }
}

impl InputRanges {
    pub fn range(&self, feature: Feature) -> FeatureRange {
        match feature {
            Feature::Svf => self.svf,
            Feature::Gvi => self.gvi,
            Feature::Bvi => self.bvi,
            Feature::AirTemperature => self.air_temperature,
            Feature::Humidity => self.humidity,
            Feature::WindSpeed => self.wind_speed,
        }
    }

    /// Check every feature, reporting the first violation in model order.
    pub fn validate(&self, features: &PetFeatures) -> Result<(), ModelError> {
        for feature in Feature::ALL {
            let value = features.get(feature);
            if !value.is_finite() {
                return Err(ModelError::NotFinite {
                    feature: feature.name(),
                });
            }
            let range = self.range(feature);
            if !range.contains(value) {
                return Err(ModelError::OutOfRange {
                    feature: feature.name(),
                    value,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
