//! Linear PET formula with named coefficients.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Contributions, Feature, ModelError, PetEstimate, PetFeatures, PetModel};

/// Coefficients of `pet = intercept + Σ coefficient · feature`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearCoefficients {
    pub intercept: f64,
    pub svf: f64,
    pub gvi: f64,
    pub bvi: f64,
    pub air_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

impl LinearCoefficients {
    /// Heuristic formula
    /// `temp + (1 - svf)·5 - gvi·2 + bvi·1.5 - wind·0.5 + humidity·0.03`
    /// expanded into intercept form.
    pub const HEURISTIC: Self = Self {
        intercept: 5.0,
        svf: -5.0,
        gvi: -2.0,
        bvi: 1.5,
        air_temperature: 1.0,
        humidity: 0.03,
        wind_speed: -0.5,
    };

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
}

impl Default for LinearCoefficients {
    fn default() -> Self {
        Self::HEURISTIC
    }
}

/// Model file layout.
#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default)]
    name: Option<String>,
    coefficients: LinearCoefficients,
}

/// Linear model over [`PetFeatures`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPetModel {
    name: String,
    coefficients: LinearCoefficients,
}

impl LinearPetModel {
    pub fn new(name: impl Into<String>, coefficients: LinearCoefficients) -> Self {
        Self {
            name: name.into(),
            coefficients,
        }
    }

    /// The built-in heuristic.
    pub fn heuristic() -> Self {
        Self::new("heuristic", LinearCoefficients::HEURISTIC)
    }

    pub fn coefficients(&self) -> &LinearCoefficients {
        &self.coefficients
    }

    /// Parse a model from YAML.
    ///
    /// ```yaml
    /// name: survey-2024
    /// coefficients:
    ///   intercept: 3.2
    ///   svf: -4.1
    /// ```
    ///
    /// Omitted coefficients take their heuristic value.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let file: ModelFile = serde_yaml::from_str(yaml)?;
        Ok(Self::from_file(file))
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let file: ModelFile = serde_json::from_str(json)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ModelFile) -> Self {
        Self::new(
            file.name.unwrap_or_else(|| "linear".to_string()),
            file.coefficients,
        )
    }

    /// Load a model file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let load_err = |message: String| ModelError::Load {
            path: path.to_path_buf(),
            message,
        };

        let contents = fs::read_to_string(path).map_err(|e| load_err(e.to_string()))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let model = match extension.as_deref() {
            Some("yaml") | Some("yml") => {
                Self::from_yaml_str(&contents).map_err(|e| load_err(e.to_string()))?
            }
            Some("json") => Self::from_json_str(&contents).map_err(|e| load_err(e.to_string()))?,
            _ => return Err(load_err("expected a .yaml, .yml or .json file".to_string())),
        };

        info!(path = ?path, model = %model.name, "Loaded linear PET model");
        Ok(model)
    }

    /// Per-feature terms of the prediction.
    pub fn contributions(&self, features: &PetFeatures) -> Contributions {
        let c = &self.coefficients;
        Contributions {
            intercept: c.intercept,
            svf: c.svf * features.svf,
            gvi: c.gvi * features.gvi,
            bvi: c.bvi * features.bvi,
            air_temperature: c.air_temperature * features.air_temperature,
            humidity: c.humidity * features.humidity,
            wind_speed: c.wind_speed * features.wind_speed,
        }
    }
}

impl Default for LinearPetModel {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl PetModel for LinearPetModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, features: &PetFeatures) -> Result<PetEstimate, ModelError> {
        for feature in Feature::ALL {
            if !features.get(feature).is_finite() {
                return Err(ModelError::NotFinite {
                    feature: feature.name(),
                });
            }
        }
        let contributions = self.contributions(features);
        Ok(PetEstimate {
            pet: contributions.total(),
            contributions: Some(contributions),
        })
    }
}
