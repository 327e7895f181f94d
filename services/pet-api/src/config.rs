//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment (a
//! `.env` file is read at startup).

use std::path::PathBuf;
use std::time::Duration;

use kma_client::{client::DEFAULT_BASE_URL, KmaConfig, Product};
use survey::DistanceMetric;

/// KMA open API options, shared by the server and the snapshot job.
#[derive(clap::Args, Clone)]
pub struct KmaArgs {
    /// KMA service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "KMA_BASE_URL")]
    pub kma_base_url: String,

    /// Decoded data.go.kr service key
    #[arg(long, default_value = "", env = "KMA_SERVICE_KEY", hide_env_values = true)]
    pub kma_service_key: String,

    /// Product used for live weather: nowcast or forecast
    #[arg(long, default_value = "nowcast", env = "KMA_PRODUCT")]
    pub kma_product: Product,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, env = "KMA_TIMEOUT_SECS")]
    pub kma_timeout_secs: u64,

    /// Connect timeout in seconds
    #[arg(long, default_value_t = 5, env = "KMA_CONNECT_TIMEOUT_SECS")]
    pub kma_connect_timeout_secs: u64,
}

impl KmaArgs {
    pub fn to_config(&self) -> KmaConfig {
        KmaConfig {
            base_url: self.kma_base_url.clone(),
            service_key: self.kma_service_key.clone(),
            product: self.kma_product,
            request_timeout: Duration::from_secs(self.kma_timeout_secs),
            connect_timeout: Duration::from_secs(self.kma_connect_timeout_secs),
            ..KmaConfig::default()
        }
    }
}

// Delegates to KmaConfig so the key is redacted.
impl std::fmt::Debug for KmaArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_config().fmt(f)
    }
}

/// Data files and resolution options for the server.
#[derive(clap::Args, Debug, Clone)]
pub struct DataArgs {
    /// Survey points file (.yaml, .yml or .json)
    #[arg(long, default_value = "config/survey_points.yaml", env = "PET_SURVEY_PATH")]
    pub survey_path: PathBuf,

    /// Linear model file; the built-in heuristic is used when absent
    #[arg(long, env = "PET_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Distance metric for nearest-point search: geodesic or haversine
    #[arg(long, default_value = "geodesic", env = "PET_DISTANCE_METRIC")]
    pub distance_metric: DistanceMetric,
}
