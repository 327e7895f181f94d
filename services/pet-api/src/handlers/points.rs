//! Survey point listing.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    Json,
};
use pet_common::PetError;
use serde::Serialize;
use survey::{LoadReport, MeasurementPoint};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub report: LoadReport,
    pub points: Vec<MeasurementPoint>,
}

/// GET /api/points
///
/// Lists every point in file order, including those whose coordinate could
/// not be decoded (`coordinate: null`).
pub async fn list_points_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<PointsResponse> {
    metrics::record_request("points");
    Json(PointsResponse {
        report: state.load_report.clone(),
        points: state.points.points().to_vec(),
    })
}

/// GET /api/points/:id
pub async fn get_point_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MeasurementPoint>> {
    metrics::record_request("point");
    state
        .points
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError(PetError::NotFound(format!("survey point '{}'", id))))
}
