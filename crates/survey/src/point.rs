//! Survey measurement points.

use pet_common::Coordinate;
use serde::{Deserialize, Serialize};

use crate::dms::{parse_dms, DmsParseError};

/// A coordinate component as stored in a survey file.
///
/// Most files carry DMS strings; decimal degrees are accepted as well.
/// Blank cells and values of any other type still deserialize so that one
/// bad row cannot fail the whole file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAngle {
    Decimal(f64),
    Dms(String),
    #[default]
    Missing,
    Other(serde_yaml::Value),
}

impl RawAngle {
    pub fn to_degrees(&self) -> Result<f64, DmsParseError> {
        match self {
            RawAngle::Decimal(v) if v.is_finite() => Ok(*v),
            RawAngle::Decimal(v) => Err(DmsParseError::InvalidNumber(v.to_string())),
            RawAngle::Dms(s) => parse_dms(s),
            RawAngle::Missing | RawAngle::Other(serde_yaml::Value::Null) => Err(DmsParseError::Missing),
            RawAngle::Other(v) => Err(DmsParseError::UnexpectedType(describe(v))),
        }
    }
}

fn describe(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::Bool(b) => format!("boolean {}", b),
        serde_yaml::Value::Sequence(_) => "sequence".to_string(),
        serde_yaml::Value::Mapping(_) => "mapping".to_string(),
        serde_yaml::Value::Tagged(t) => format!("tagged value {}", t.tag),
        other => format!("{:?}", other),
    }
}

impl From<&str> for RawAngle {
    fn from(s: &str) -> Self {
        RawAngle::Dms(s.to_string())
    }
}

/// One row of a survey file, before coordinate parsing.
///
/// Field aliases accept the column spellings of the field survey sheets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRecord {
    #[serde(alias = "Location_Name", alias = "name")]
    pub id: String,

    #[serde(default, alias = "Lat")]
    pub lat: RawAngle,

    #[serde(default, alias = "Lon")]
    pub lon: RawAngle,

    #[serde(alias = "SVF")]
    pub svf: f64,

    #[serde(alias = "GVI")]
    pub gvi: f64,

    #[serde(alias = "BVI")]
    pub bvi: f64,

    #[serde(default, alias = "AirTemperature")]
    pub air_temperature: Option<f64>,

    #[serde(default, alias = "Humidity")]
    pub humidity: Option<f64>,

    #[serde(default, alias = "WindSpeed")]
    pub wind_speed: Option<f64>,

    #[serde(default, alias = "PET")]
    pub pet: Option<f64>,
}

impl SurveyRecord {
    /// Decode the record's coordinate.
    pub fn coordinate(&self) -> Result<Coordinate, DmsParseError> {
        let lat = self.lat.to_degrees()?;
        let lon = self.lon.to_degrees()?;
        Coordinate::new(lat, lon).map_err(|e| DmsParseError::OutOfRange(e.to_string()))
    }
}

/// Street-level view indices, each a fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewIndices {
    /// Sky view factor
    pub svf: f64,
    /// Green view index
    pub gvi: f64,
    /// Building view index
    pub bvi: f64,
}

/// Conditions recorded on site when the point was surveyed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservedConditions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<f64>,
}

/// An immutable survey point.
///
/// `coordinate` is `None` when the source record could not be decoded;
/// such points are kept for reporting but never take part in nearest-point
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPoint {
    pub id: String,
    pub coordinate: Option<Coordinate>,
    pub indices: ViewIndices,
    #[serde(default)]
    pub observed: ObservedConditions,
}

impl MeasurementPoint {
    pub fn new(id: impl Into<String>, coordinate: Option<Coordinate>, indices: ViewIndices) -> Self {
        Self {
            id: id.into(),
            coordinate,
            indices,
            observed: ObservedConditions::default(),
        }
    }

    /// Set the on-site conditions.
    pub fn with_observed(mut self, observed: ObservedConditions) -> Self {
        self.observed = observed;
        self
    }

    /// Build a point from a raw record.
    ///
    /// A coordinate that fails to decode leaves the point without one and
    /// the error is returned alongside for reporting.
    pub fn from_record(record: SurveyRecord) -> (Self, Option<DmsParseError>) {
        let (coordinate, error) = match record.coordinate() {
            Ok(c) => (Some(c), None),
            Err(e) => (None, Some(e)),
        };

        let point = Self {
            id: record.id,
            coordinate,
            indices: ViewIndices {
                svf: record.svf,
                gvi: record.gvi,
                bvi: record.bvi,
            },
            observed: ObservedConditions {
                air_temperature: record.air_temperature,
                humidity: record.humidity,
                wind_speed: record.wind_speed,
                pet: record.pet,
            },
        };
        (point, error)
    }

    /// Whether the point can be selected as nearest.
    pub fn is_candidate(&self) -> bool {
        self.coordinate.is_some()
    }
}
