//! PET estimation service library.
//!
//! Wires the grid projection, survey resolution, KMA weather and PET model
//! crates into an axum router. The binary in `main.rs` only parses
//! configuration and serves [`router`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Estimation
        .route("/api/estimate", get(handlers::estimate::estimate_handler))
        .route("/api/predict", post(handlers::predict::predict_handler))
        // Core lookups
        .route("/api/nearest", get(handlers::nearest::nearest_handler))
        .route("/api/grid", get(handlers::grid::grid_handler))
        .route("/api/grid/:nx/:ny", get(handlers::grid::inverse_handler))
        // Survey points
        .route("/api/points", get(handlers::points::list_points_handler))
        .route("/api/points/:id", get(handlers::points::get_point_handler))
        // Weather proxy
        .route("/kma", get(handlers::weather::kma_handler))
        // Health and metrics
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
