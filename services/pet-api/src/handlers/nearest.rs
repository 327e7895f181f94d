//! Nearest survey point handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    Json,
};
use serde::Serialize;
use survey::{DistanceMetric, Nearest, ObservedConditions, ViewIndices};

use super::common::CoordQuery;
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Nearest survey point with its distance from the query.
#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub id: String,
    pub index: usize,
    pub lat: f64,
    pub lon: f64,
    pub distance_m: f64,
    pub metric: DistanceMetric,
    pub indices: ViewIndices,
    pub observed: ObservedConditions,
}

impl NearestResponse {
    pub fn new(nearest: &Nearest<'_>, metric: DistanceMetric) -> Self {
        Self {
            id: nearest.point.id.clone(),
            index: nearest.index,
            lat: nearest.coordinate.lat,
            lon: nearest.coordinate.lon,
            distance_m: nearest.distance_m,
            metric,
            indices: nearest.point.indices,
            observed: nearest.point.observed,
        }
    }
}

/// GET /api/nearest?lat=..&lon=..
pub async fn nearest_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> ApiResult<Json<NearestResponse>> {
    metrics::record_request("nearest");
    let coord = params.coordinate()?;
    let nearest = state.points.nearest(coord, state.metric)?;
    Ok(Json(NearestResponse::new(&nearest, state.metric)))
}
