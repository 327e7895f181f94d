//! Weather snapshot job.
//!
//! Projects a configured location onto the KMA grid, fetches the current
//! village forecast for that cell and writes it as JSON. Meant to run from
//! cron so the map can show recent weather without calling the API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kma_client::{kst_now, KmaClient};
use projection::LambertGrid;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use pet_api::config::KmaArgs;
use pet_api::handlers::weather::KmaWeatherRecord;

#[derive(Parser, Debug)]
#[command(name = "update-weather")]
#[command(about = "Fetch the latest KMA village forecast and write a JSON snapshot")]
struct Args {
    /// Latitude of the snapshot location
    #[arg(long, default_value_t = 35.233, env = "SNAPSHOT_LAT", allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the snapshot location
    #[arg(long, default_value_t = 129.08, env = "SNAPSHOT_LON", allow_negative_numbers = true)]
    lon: f64,

    /// Output file
    #[arg(short, long, default_value = "kma_latest_weather.json", env = "SNAPSHOT_OUTPUT")]
    output: PathBuf,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    #[command(flatten)]
    kma: KmaArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).json().init();

    let grid = LambertGrid::kma();
    let (cell, warning) = grid.project_checked(args.lat, args.lon);
    if let Some(w) = warning {
        warn!(lat = args.lat, lon = args.lon, %w, "Snapshot location is outside the KMA grid");
    }

    let client = KmaClient::new(args.kma.to_config()).context("building KMA client")?;
    let obs = client
        .forecast(cell, kst_now())
        .await
        .with_context(|| format!("fetching village forecast for cell {}", cell))?;

    let record = KmaWeatherRecord::from(&obs);
    let json = serde_json::to_string_pretty(&record)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        nx = record.nx,
        ny = record.ny,
        base_date = %record.base_date,
        base_time = %record.base_time,
        airtemperature = record.airtemperature,
        humidity = record.humidity,
        windspeed = record.windspeed,
        "Weather snapshot written"
    );
    Ok(())
}
