//! Query parsing shared by the coordinate endpoints.

use pet_common::{Coordinate, PetError};
use serde::Deserialize;

use crate::error::ApiError;

/// `?lat=..&lon=..` query parameters.
///
/// Kept as strings so that missing and malformed values produce JSON
/// errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct CoordQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordQuery {
    /// Validate into a coordinate.
    pub fn coordinate(&self) -> Result<Coordinate, ApiError> {
        let lat = parse_param("lat", self.lat.as_deref())?;
        let lon = parse_param("lon", self.lon.as_deref())?;
        Ok(Coordinate::new(lat, lon)?)
    }
}

fn parse_param(name: &str, value: Option<&str>) -> Result<f64, ApiError> {
    let raw = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError(PetError::MissingParameter(name.to_string())))?;
    raw.parse::<f64>().map_err(|_| {
        ApiError(PetError::InvalidParameter {
            param: name.to_string(),
            message: format!("'{}' is not a number", raw),
        })
    })
}
