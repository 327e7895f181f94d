//! Distance metrics for nearest-point search.

use std::str::FromStr;

use geo::{GeodesicDistance, HaversineDistance, Point};
use pet_common::Coordinate;
use serde::{Deserialize, Serialize};

/// Great-circle distance metric, in meters.
///
/// The two metrics can disagree about which point is nearest when a query
/// sits close to the midpoint of two candidates, so a single metric is used
/// for a whole query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Ellipsoidal WGS84 geodesic (Karney).
    #[default]
    Geodesic,
    /// Spherical haversine on the mean earth radius. Faster, up to ~0.5% off.
    Haversine,
}

impl DistanceMetric {
    /// Distance between two coordinates in meters.
    pub fn distance_m(&self, a: Coordinate, b: Coordinate) -> f64 {
        // geo points are (x = lon, y = lat)
        let pa = Point::new(a.lon, a.lat);
        let pb = Point::new(b.lon, b.lat);
        match self {
            DistanceMetric::Geodesic => pa.geodesic_distance(&pb),
            DistanceMetric::Haversine => pa.haversine_distance(&pb),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceMetric::Geodesic => "geodesic",
            DistanceMetric::Haversine => "haversine",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geodesic" => Ok(DistanceMetric::Geodesic),
            "haversine" => Ok(DistanceMetric::Haversine),
            other => Err(format!(
                "Unknown distance metric '{}'. Expected 'geodesic' or 'haversine'",
                other
            )),
        }
    }
}
