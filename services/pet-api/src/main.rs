//! PET API Server
//!
//! Estimates Physiological Equivalent Temperature for a map location from
//! the nearest survey point and live KMA weather.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pet_api::config::{DataArgs, KmaArgs};
use pet_api::state::AppState;

/// PET API Server
#[derive(Parser, Debug)]
#[command(name = "pet-api")]
#[command(about = "Thermal comfort (PET) estimation server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8085", env = "PET_LISTEN_ADDR")]
    listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Number of worker threads
    #[arg(long, env = "PET_WORKER_THREADS")]
    worker_threads: Option<usize>,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    kma: KmaArgs,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build runtime with configured threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder
        .build()
        .context("Failed to create Tokio runtime")?;

    runtime.block_on(run_server(args))
}

async fn run_server(args: Args) -> Result<()> {
    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .json()
        .init();

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    info!(kma = ?args.kma, data = ?args.data, "Starting PET API server");

    // Initialize application state
    let state = AppState::from_args(&args.data, &args.kma)
        .context("Failed to initialize application state")?
        .with_prometheus(prometheus_handle);
    pet_api::metrics::record_survey(state.load_report.total, state.load_report.valid);

    let app = pet_api::router(Arc::new(state));

    // Parse listen address
    let addr: SocketAddr = args
        .listen
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", args.listen))?;

    info!("PET API listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
