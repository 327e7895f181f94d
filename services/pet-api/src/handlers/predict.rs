//! Manual PET calculator.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use pet_common::PetError;
use pet_model::{Contributions, PetFeatures};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub features: PetFeatures,
    pub model: String,
    pub pet: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Contributions>,
}

/// POST /api/predict
///
/// Body is a [`PetFeatures`] object. Inputs outside the accepted ranges are
/// rejected rather than extrapolated.
pub async fn predict_handler(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<PetFeatures>, axum::extract::rejection::JsonRejection>,
) -> ApiResult<Json<PredictResponse>> {
    metrics::record_request("predict");
    let Json(features) = body.map_err(|e| {
        ApiError(PetError::InvalidParameter {
            param: "body".to_string(),
            message: e.body_text(),
        })
    })?;

    state.ranges.validate(&features)?;
    let estimate = state.model.predict(&features)?;

    Ok(Json(PredictResponse {
        features,
        model: state.model.name().to_string(),
        pet: estimate.pet,
        contributions: estimate.contributions,
    }))
}
