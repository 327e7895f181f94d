//! Live weather lookup and the KMA proxy endpoint.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    Json,
};
use pet_common::{GridCell, WeatherObservation};
use serde::{Deserialize, Serialize};

use super::common::CoordQuery;
use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Weather in the flat layout used by the map front end and the snapshot
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KmaWeatherRecord {
    pub airtemperature: f64,
    pub humidity: f64,
    pub windspeed: f64,
    pub nx: i32,
    pub ny: i32,
    /// `YYYYMMDD`
    pub base_date: String,
    /// `HHMM`
    pub base_time: String,
}

impl From<&WeatherObservation> for KmaWeatherRecord {
    fn from(obs: &WeatherObservation) -> Self {
        Self {
            airtemperature: obs.air_temperature,
            humidity: obs.humidity,
            windspeed: obs.wind_speed,
            nx: obs.cell.nx,
            ny: obs.cell.ny,
            base_date: obs.base_time.format("%Y%m%d").to_string(),
            base_time: obs.base_time.format("%H%M").to_string(),
        }
    }
}

/// Which product a weather lookup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The product configured for the service
    Current,
    /// Always the village forecast
    VillageForecast,
}

/// Fetch weather for `cell`, recording timing and failures.
pub async fn fetch_weather(
    state: &AppState,
    cell: GridCell,
    lookup: Lookup,
) -> Result<WeatherObservation, ApiError> {
    let started = Instant::now();
    let result = match lookup {
        Lookup::Current => state.weather.current(cell).await,
        Lookup::VillageForecast => state.weather.village_forecast(cell).await,
    };
    metrics::record_weather_fetch(started.elapsed(), result.is_ok());

    match result {
        Ok(obs) => {
            tracing::debug!(
                nx = cell.nx,
                ny = cell.ny,
                air_temperature = obs.air_temperature,
                humidity = obs.humidity,
                wind_speed = obs.wind_speed,
                "Fetched weather"
            );
            Ok(obs)
        }
        Err(e) => {
            tracing::warn!(nx = cell.nx, ny = cell.ny, error = %e, "Weather fetch failed");
            Err(e.into())
        }
    }
}

/// GET /kma?lat=..&lon=..
///
/// Serves the village forecast regardless of the configured product.
pub async fn kma_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> ApiResult<Json<KmaWeatherRecord>> {
    metrics::record_request("kma");
    let coord = params.coordinate()?;
    let cell = state.grid.geo_to_grid(coord.lat, coord.lon);
    let obs = fetch_weather(&state, cell, Lookup::VillageForecast).await?;
    Ok(Json(KmaWeatherRecord::from(&obs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_layout() {
        let base = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        let obs = WeatherObservation {
            air_temperature: 22.5,
            humidity: 80.0,
            wind_speed: 0.9,
            cell: GridCell::new(98, 77),
            base_time: base,
            valid_time: base,
        };
        let json = serde_json::to_value(KmaWeatherRecord::from(&obs)).unwrap();
        assert_eq!(json["airtemperature"], 22.5);
        assert_eq!(json["windspeed"], 0.9);
        assert_eq!(json["nx"], 98);
        assert_eq!(json["base_date"], "20250615");
        assert_eq!(json["base_time"], "0500");
    }
}
