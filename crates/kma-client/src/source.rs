//! Weather source abstraction.

use async_trait::async_trait;
use pet_common::{GridCell, WeatherObservation};

use crate::KmaError;

/// Provider of current weather for a grid cell.
///
/// Implementations make a single bounded attempt per call; callers decide
/// what to do on failure.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Weather from the configured product.
    async fn current(&self, cell: GridCell) -> Result<WeatherObservation, KmaError>;

    /// Weather from the village forecast, whatever the configured product.
    ///
    /// Sources with a single product answer with `current`.
    async fn village_forecast(&self, cell: GridCell) -> Result<WeatherObservation, KmaError> {
        self.current(cell).await
    }
}
