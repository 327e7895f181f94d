//! Grid projection handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use pet_common::GridCell;
use projection::{DomainWarning, LambertGrid};
use serde::Serialize;

use super::common::CoordQuery;
use crate::error::ApiResult;
use crate::metrics;
use crate::state::AppState;

/// Projected grid cell.
#[derive(Debug, Serialize)]
pub struct GridResponse {
    pub nx: i32,
    pub ny: i32,
    pub in_service_area: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl GridResponse {
    pub fn new(cell: GridCell, warning: Option<&DomainWarning>) -> Self {
        Self {
            nx: cell.nx,
            ny: cell.ny,
            in_service_area: warning.is_none(),
            warning: warning.map(|w| w.to_string()),
        }
    }
}

/// Reference coordinate of a grid cell.
#[derive(Debug, Serialize)]
pub struct InverseResponse {
    pub nx: i32,
    pub ny: i32,
    pub lat: f64,
    pub lon: f64,
    pub in_service_area: bool,
}

/// GET /api/grid?lat=..&lon=..
pub async fn grid_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CoordQuery>,
) -> ApiResult<Json<GridResponse>> {
    metrics::record_request("grid");
    let coord = params.coordinate()?;
    let (cell, warning) = state.grid.project_checked(coord.lat, coord.lon);
    Ok(Json(GridResponse::new(cell, warning.as_ref())))
}

/// GET /api/grid/:nx/:ny
pub async fn inverse_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((nx, ny)): Path<(i32, i32)>,
) -> Json<InverseResponse> {
    metrics::record_request("grid_inverse");
    Json(inverse(&state.grid, GridCell::new(nx, ny)))
}

fn inverse(grid: &LambertGrid, cell: GridCell) -> InverseResponse {
    let coord = grid.grid_to_geo(cell);
    InverseResponse {
        nx: cell.nx,
        ny: cell.ny,
        lat: coord.lat,
        lon: coord.lon,
        in_service_area: grid.service_area().contains(cell),
    }
}
