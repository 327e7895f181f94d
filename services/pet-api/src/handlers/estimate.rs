//! Full estimation cycle for one map click.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    Json,
};
use chrono::NaiveDateTime;
use pet_common::{Coordinate, WeatherObservation};
use pet_model::{Contributions, PetFeatures};
use serde::Serialize;

use super::common::CoordQuery;
use super::grid::GridResponse;
use super::nearest::NearestResponse;
use super::weather::{fetch_weather, Lookup};
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Weather used for the estimate.
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    pub air_temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub base_time: NaiveDateTime,
    pub valid_time: NaiveDateTime,
}

impl From<&WeatherObservation> for WeatherSummary {
    fn from(obs: &WeatherObservation) -> Self {
        Self {
            air_temperature: obs.air_temperature,
            humidity: obs.humidity,
            wind_speed: obs.wind_speed,
            base_time: obs.base_time,
            valid_time: obs.valid_time,
        }
    }
}

/// Response of `/api/estimate`.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub location: Coordinate,
    pub grid: GridResponse,
    pub nearest: NearestResponse,
    pub weather: WeatherSummary,
    pub features: PetFeatures,
    pub model: String,
    pub pet: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Contributions>,
}

/// GET /api/estimate?lat=..&lon=..
///
/// Projects the click to a grid cell, resolves the nearest survey point,
/// fetches live weather for the cell and scores the combined features.
pub async fn estimate_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> ApiResult<Json<EstimateResponse>> {
    metrics::record_request("estimate");
    let result = estimate(&state, &params).await;
    if let Err(ref e) = result {
        metrics::record_error("estimate", e.status().as_u16());
    }
    result.map(Json)
}

async fn estimate(state: &AppState, params: &CoordQuery) -> ApiResult<EstimateResponse> {
    let location = params.coordinate()?;

    // Survey lookup first: an empty survey fails without a network call
    let nearest = state.points.nearest(location, state.metric)?;
    let (cell, warning) = state.grid.project_checked(location.lat, location.lon);

    let obs = fetch_weather(state, cell, Lookup::Current).await?;

    let features = PetFeatures {
        svf: nearest.point.indices.svf,
        gvi: nearest.point.indices.gvi,
        bvi: nearest.point.indices.bvi,
        air_temperature: obs.air_temperature,
        humidity: obs.humidity,
        wind_speed: obs.wind_speed,
    };
    let estimate = state.model.predict(&features)?;
    metrics::record_estimate(estimate.pet, warning.is_some());

    tracing::info!(
        lat = location.lat,
        lon = location.lon,
        nx = cell.nx,
        ny = cell.ny,
        point = %nearest.point.id,
        distance_m = nearest.distance_m,
        pet = estimate.pet,
        "PET estimated"
    );

    Ok(EstimateResponse {
        location,
        grid: GridResponse::new(cell, warning.as_ref()),
        nearest: NearestResponse::new(&nearest, state.metric),
        weather: WeatherSummary::from(&obs),
        features,
        model: state.model.name().to_string(),
        pet: estimate.pet,
        contributions: estimate.contributions,
    })
}
