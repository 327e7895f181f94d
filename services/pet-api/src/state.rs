//! Application state for the PET API.

use std::sync::Arc;

use anyhow::{Context, Result};
use kma_client::{KmaClient, WeatherSource};
use metrics_exporter_prometheus::PrometheusHandle;
use pet_model::{InputRanges, LinearPetModel, PetModel};
use projection::LambertGrid;
use survey::{DistanceMetric, LoadReport, PointSet};
use tracing::{info, warn};

use crate::config::{DataArgs, KmaArgs};

/// Shared application state.
///
/// Everything here is read-only after startup.
pub struct AppState {
    /// Survey points, including records without a usable coordinate.
    pub points: PointSet,

    /// Load report for the survey file.
    pub load_report: LoadReport,

    /// KMA grid projection.
    pub grid: LambertGrid,

    /// PET model.
    pub model: Arc<dyn PetModel>,

    /// Live weather provider.
    pub weather: Arc<dyn WeatherSource>,

    /// Metric for nearest-point search.
    pub metric: DistanceMetric,

    /// Accepted ranges for manual predictions.
    pub ranges: InputRanges,

    /// Prometheus renderer, absent when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Assemble state from already constructed parts.
    pub fn new(
        points: PointSet,
        model: Arc<dyn PetModel>,
        weather: Arc<dyn WeatherSource>,
        metric: DistanceMetric,
    ) -> Self {
        let load_report = LoadReport {
            total: points.len(),
            valid: points.valid_count(),
            skipped: points
                .points()
                .iter()
                .filter(|p| !p.is_candidate())
                .map(|p| p.id.clone())
                .collect(),
        };
        Self {
            points,
            load_report,
            grid: LambertGrid::kma(),
            model,
            weather,
            metric,
            ranges: InputRanges::default(),
            prometheus: None,
        }
    }

    /// Attach the Prometheus handle used by `/metrics`.
    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Load files and build the KMA client from configuration.
    pub fn from_args(data: &DataArgs, kma: &KmaArgs) -> Result<Self> {
        let (points, report) = PointSet::load(&data.survey_path)
            .with_context(|| format!("loading survey points from {}", data.survey_path.display()))?;
        if report.valid == 0 {
            warn!(
                path = %data.survey_path.display(),
                "Survey file has no point with a valid coordinate; nearest-point queries will fail"
            );
        }

        let model: Arc<dyn PetModel> = match &data.model_path {
            Some(path) => Arc::new(LinearPetModel::load(path)?),
            None => {
                info!("No model file configured, using the heuristic formula");
                Arc::new(LinearPetModel::heuristic())
            }
        };

        let client = KmaClient::new(kma.to_config()).context("building KMA client")?;

        let mut state = Self::new(points, model, Arc::new(client), data.distance_metric);
        state.load_report = report;
        Ok(state)
    }

    /// Ready once at least one survey point can be resolved.
    pub fn is_ready(&self) -> bool {
        self.load_report.valid > 0
    }
}
