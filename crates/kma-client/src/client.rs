//! HTTP client for the KMA forecast service.

use std::str::FromStr;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use pet_common::{GridCell, WeatherObservation};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::base_time::{forecast_base, kst_now, nowcast_base, start_of_hour, BaseTime};
use crate::response::{decode_forecast, decode_nowcast};
use crate::{KmaError, WeatherSource};

/// Default endpoint of `VilageFcstInfoService_2.0`.
pub const DEFAULT_BASE_URL: &str = "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0";

/// Which KMA product answers [`WeatherSource::current`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    /// Ultra short-term nowcast
    #[default]
    Nowcast,
    /// Village forecast
    Forecast,
}

impl FromStr for Product {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nowcast" => Ok(Product::Nowcast),
            "forecast" => Ok(Product::Forecast),
            other => Err(format!(
                "Unknown product '{}'. Expected 'nowcast' or 'forecast'",
                other
            )),
        }
    }
}

/// Configuration for the KMA client.
#[derive(Clone)]
pub struct KmaConfig {
    /// Service base URL
    pub base_url: String,
    /// Decoded data.go.kr service key
    pub service_key: String,
    /// Product used by [`WeatherSource::current`]
    pub product: Product,
    /// Overall request timeout
    pub request_timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// `numOfRows` for nowcast requests
    pub nowcast_rows: u32,
    /// `numOfRows` for forecast requests
    pub forecast_rows: u32,
}

impl Default for KmaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            service_key: String::new(),
            product: Product::Nowcast,
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            nowcast_rows: 100,
            forecast_rows: 1000,
        }
    }
}

// The service key stays out of logs.
impl std::fmt::Debug for KmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KmaConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"<redacted>")
            .field("product", &self.product)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("nowcast_rows", &self.nowcast_rows)
            .field("forecast_rows", &self.forecast_rows)
            .finish()
    }
}

/// Client for KMA nowcast and village forecast requests.
///
/// Each call is a single attempt bounded by the configured timeouts.
pub struct KmaClient {
    client: Client,
    config: KmaConfig,
}

impl KmaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: KmaConfig) -> Result<Self, KmaError> {
        if config.service_key.is_empty() {
            warn!("KMA service key is empty; requests will be rejected by the API");
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(4)
            .tcp_nodelay(true)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &KmaConfig {
        &self.config
    }

    /// Current nowcast observation for `cell` as of `now` (KST).
    #[instrument(skip(self), fields(nx = cell.nx, ny = cell.ny))]
    pub async fn nowcast(
        &self,
        cell: GridCell,
        now: NaiveDateTime,
    ) -> Result<WeatherObservation, KmaError> {
        let base = nowcast_base(now);
        let body = self
            .fetch("getUltraSrtNcst", cell, base, self.config.nowcast_rows)
            .await?;
        decode_nowcast(&body, cell, base)
    }

    /// Village forecast for `cell` as of `now` (KST).
    ///
    /// Returns the forecast slot covering the current hour, or the nearest
    /// later one.
    #[instrument(skip(self), fields(nx = cell.nx, ny = cell.ny))]
    pub async fn forecast(
        &self,
        cell: GridCell,
        now: NaiveDateTime,
    ) -> Result<WeatherObservation, KmaError> {
        let base = forecast_base(now);
        let body = self
            .fetch("getVilageFcst", cell, base, self.config.forecast_rows)
            .await?;
        decode_forecast(&body, cell, base, start_of_hour(now))
    }

    async fn fetch(
        &self,
        operation: &str,
        cell: GridCell,
        base: BaseTime,
        rows: u32,
    ) -> Result<String, KmaError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), operation);
        let base_date = base.base_date();
        let base_time = base.base_time();

        debug!(
            operation = operation,
            base_date = %base_date,
            base_time = %base_time,
            "Requesting KMA data"
        );

        let rows = rows.to_string();
        let nx = cell.nx.to_string();
        let ny = cell.ny.to_string();

        let started = Instant::now();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("serviceKey", self.config.service_key.as_str()),
                ("pageNo", "1"),
                ("numOfRows", rows.as_str()),
                ("dataType", "JSON"),
                ("base_date", base_date.as_str()),
                ("base_time", base_time.as_str()),
                ("nx", nx.as_str()),
                ("ny", ny.as_str()),
            ])
            .send()
            .await
            .map_err(KmaError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(operation = operation, status = status.as_u16(), "KMA request failed");
            return Err(KmaError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(KmaError::from_transport)?;
        info!(
            operation = operation,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "KMA response received"
        );
        Ok(body)
    }
}

#[async_trait]
impl WeatherSource for KmaClient {
    async fn current(&self, cell: GridCell) -> Result<WeatherObservation, KmaError> {
        let now = kst_now();
        match self.config.product {
            Product::Nowcast => self.nowcast(cell, now).await,
            Product::Forecast => self.forecast(cell, now).await,
        }
    }

    async fn village_forecast(&self, cell: GridCell) -> Result<WeatherObservation, KmaError> {
        self.forecast(cell, kst_now()).await
    }
}
