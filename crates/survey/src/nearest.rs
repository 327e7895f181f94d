//! Nearest survey point resolution.

use pet_common::Coordinate;
use serde::Serialize;

use crate::{DistanceMetric, MeasurementPoint, SurveyError};

/// Result of a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nearest<'a> {
    pub point: &'a MeasurementPoint,
    /// Coordinate of `point`
    pub coordinate: Coordinate,
    /// Position of the point in the source collection
    pub index: usize,
    pub distance_m: f64,
}

/// Find the point closest to `(lat, lon)`.
///
/// Scans every point once. Points without a coordinate are skipped. When
/// distances tie, the point that appears first in `points` wins.
pub fn resolve_nearest(
    lat: f64,
    lon: f64,
    points: &[MeasurementPoint],
    metric: DistanceMetric,
) -> Result<Nearest<'_>, SurveyError> {
    let query = Coordinate::new(lat, lon)?;

    let mut best: Option<Nearest<'_>> = None;
    for (index, point) in points.iter().enumerate() {
        let Some(coord) = point.coordinate else {
            continue;
        };
        let distance_m = metric.distance_m(query, coord);
        // Strict comparison keeps the earliest point on ties
        if best.map_or(true, |b| distance_m < b.distance_m) {
            best = Some(Nearest {
                point,
                coordinate: coord,
                index,
                distance_m,
            });
        }
    }

    best.ok_or(SurveyError::EmptyCandidateSet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewIndices;

    const INDICES: ViewIndices = ViewIndices {
        svf: 0.5,
        gvi: 0.2,
        bvi: 0.3,
    };

    fn point(id: &str, lat: f64, lon: f64) -> MeasurementPoint {
        MeasurementPoint::new(id, Some(Coordinate::new_unchecked(lat, lon)), INDICES)
    }

    #[test]
    fn test_empty_collection_fails() {
        let err = resolve_nearest(35.0, 129.0, &[], DistanceMetric::Geodesic).unwrap_err();
        assert!(matches!(err, SurveyError::EmptyCandidateSet));
    }

    #[test]
    fn test_only_invalid_points_fails() {
        let points = vec![MeasurementPoint::new("broken", None, INDICES)];
        let err = resolve_nearest(35.0, 129.0, &points, DistanceMetric::Geodesic).unwrap_err();
        assert!(matches!(err, SurveyError::EmptyCandidateSet));
    }

    #[test]
    fn test_single_point() {
        let points = vec![point("only", 35.0, 129.0)];
        let nearest = resolve_nearest(36.0, 128.0, &points, DistanceMetric::Geodesic).unwrap();
        assert_eq!(nearest.point.id, "only");
        assert_eq!(nearest.index, 0);
        assert!(nearest.distance_m > 100_000.0);
    }

    #[test]
    fn test_invalid_query_rejected() {
        let points = vec![point("only", 35.0, 129.0)];
        let err = resolve_nearest(f64::NAN, 129.0, &points, DistanceMetric::Geodesic).unwrap_err();
        assert!(matches!(err, SurveyError::InvalidQuery(_)));
        let err = resolve_nearest(35.0, 190.0, &points, DistanceMetric::Geodesic).unwrap_err();
        assert!(matches!(err, SurveyError::InvalidQuery(_)));
    }

    #[test]
    fn test_index_skips_invalid_points() {
        let points = vec![
            MeasurementPoint::new("broken", None, INDICES),
            point("far", 36.0, 129.0),
            point("near", 35.001, 129.0),
        ];
        let nearest = resolve_nearest(35.0, 129.0, &points, DistanceMetric::Haversine).unwrap();
        assert_eq!(nearest.point.id, "near");
        assert_eq!(nearest.index, 2);
    }
}
