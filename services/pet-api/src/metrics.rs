//! Application metrics.
//!
//! Thin wrappers over the `metrics` macros so metric names live in one
//! place. The Prometheus recorder is installed in `main`.

use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Count a request to `endpoint`.
pub fn record_request(endpoint: &'static str) {
    counter!("pet_requests_total", "endpoint" => endpoint).increment(1);
}

/// Count a request that ended in an error response.
pub fn record_error(endpoint: &'static str, status: u16) {
    counter!(
        "pet_request_errors_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one weather fetch.
pub fn record_weather_fetch(elapsed: Duration, ok: bool) {
    histogram!("weather_fetch_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
    if !ok {
        counter!("weather_fetch_failures_total").increment(1);
    }
}

/// Record a produced PET estimate.
pub fn record_estimate(pet: f64, outside_service_area: bool) {
    histogram!("pet_estimate_celsius").record(pet);
    if outside_service_area {
        counter!("grid_domain_warnings_total").increment(1);
    }
}

/// Publish survey load figures.
pub fn record_survey(total: usize, valid: usize) {
    gauge!("survey_points_total").set(total as f64);
    gauge!("survey_points_valid").set(valid as f64);
}
