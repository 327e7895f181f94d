//! Immutable collections of survey points.
//!
//! A point set is loaded once at startup and shared read-only for the
//! lifetime of the process.

use std::path::Path;

use pet_common::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{resolve_nearest, DistanceMetric, MeasurementPoint, Nearest, SurveyError, SurveyRecord};

/// On-disk layout of a survey file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyFile {
    #[serde(default)]
    pub points: Vec<SurveyRecord>,
}

/// Outcome of building a point set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Records read
    pub total: usize,
    /// Records with a usable coordinate
    pub valid: usize,
    /// Ids of records whose coordinate could not be decoded
    pub skipped: Vec<String>,
}

/// Survey points in source order.
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<MeasurementPoint>,
}

impl PointSet {
    /// Build a set from points that are already decoded.
    pub fn new(points: Vec<MeasurementPoint>) -> Self {
        Self { points }
    }

    /// Build a set from raw records.
    ///
    /// Records with an undecodable coordinate stay in the set without one;
    /// they are listed in the report and never resolved as nearest.
    pub fn from_records(records: Vec<SurveyRecord>) -> (Self, LoadReport) {
        let mut report = LoadReport {
            total: records.len(),
            ..Default::default()
        };

        let mut points = Vec::with_capacity(records.len());
        for record in records {
            let (point, error) = MeasurementPoint::from_record(record);
            match error {
                None => report.valid += 1,
                Some(e) => {
                    warn!(id = %point.id, error = %e, "Skipping survey point with bad coordinate");
                    report.skipped.push(point.id.clone());
                }
            }
            points.push(point);
        }

        (Self { points }, report)
    }

    /// Parse a YAML survey document.
    pub fn from_yaml_str(s: &str) -> Result<(Self, LoadReport), serde_yaml::Error> {
        let file: SurveyFile = serde_yaml::from_str(s)?;
        Ok(Self::from_records(file.points))
    }

    /// Parse a JSON survey document.
    pub fn from_json_str(s: &str) -> Result<(Self, LoadReport), serde_json::Error> {
        let file: SurveyFile = serde_json::from_str(s)?;
        Ok(Self::from_records(file.points))
    }

    /// Load a survey file, choosing the format from the extension.
    pub fn load(path: &Path) -> Result<(Self, LoadReport), SurveyError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !matches!(ext.as_str(), "yaml" | "yml" | "json") {
            return Err(SurveyError::UnsupportedFormat(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| SurveyError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format_err = |message: String| SurveyError::Format {
            path: path.to_path_buf(),
            message,
        };
        let (set, report) = if ext == "json" {
            Self::from_json_str(&content).map_err(|e| format_err(e.to_string()))?
        } else {
            Self::from_yaml_str(&content).map_err(|e| format_err(e.to_string()))?
        };

        info!(
            path = %path.display(),
            total = report.total,
            valid = report.valid,
            skipped = report.skipped.len(),
            "Loaded survey points"
        );
        Ok((set, report))
    }

    pub fn points(&self) -> &[MeasurementPoint] {
        &self.points
    }

    /// Points that can be resolved as nearest.
    pub fn candidates(&self) -> impl Iterator<Item = &MeasurementPoint> {
        self.points.iter().filter(|p| p.is_candidate())
    }

    pub fn valid_count(&self) -> usize {
        self.candidates().count()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Find a point by id (case-insensitive).
    pub fn find(&self, id: &str) -> Option<&MeasurementPoint> {
        let id_lower = id.to_lowercase();
        self.points.iter().find(|p| p.id.to_lowercase() == id_lower)
    }

    /// Nearest point to `query`.
    pub fn nearest(
        &self,
        query: Coordinate,
        metric: DistanceMetric,
    ) -> Result<Nearest<'_>, SurveyError> {
        resolve_nearest(query.lat, query.lon, &self.points, metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixtures::survey;

    #[test]
    fn test_campus_yaml_report() {
        let (set, report) = PointSet::from_yaml_str(survey::CAMPUS_YAML).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 3);
        assert_eq!(report.skipped, vec!["Broken Record".to_string()]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.valid_count(), 3);
    }

    #[test]
    fn test_order_preserved() {
        let (set, _) = PointSet::from_yaml_str(survey::CAMPUS_YAML).unwrap();
        let ids: Vec<&str> = set.points().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["PNU Main Gate", "Geumjeong Library", "Jangjeon Stream", "Broken Record"]
        );
    }

    #[test]
    fn test_observed_conditions_loaded() {
        let (set, _) = PointSet::from_yaml_str(survey::CAMPUS_YAML).unwrap();
        let gate = set.find("pnu main gate").unwrap();
        assert_eq!(gate.observed.air_temperature, Some(29.4));
        assert_eq!(gate.observed.pet, Some(34.8));
        let stream = set.find("Jangjeon Stream").unwrap();
        assert_eq!(stream.observed.air_temperature, None);
    }

    #[test]
    fn test_json_two_points() {
        let (set, report) = PointSet::from_json_str(survey::TWO_POINT_JSON).unwrap();
        assert_eq!(report.valid, 2);
        assert_eq!(set.points()[1].coordinate.unwrap().lat, 35.0 + 10.0 / 60.0);
    }

    #[test]
    fn test_all_broken_has_no_candidates() {
        let (set, report) = PointSet::from_yaml_str(survey::ALL_BROKEN_YAML).unwrap();
        assert_eq!(report.valid, 0);
        assert_eq!(set.len(), 2);
        let err = set
            .nearest(Coordinate::new_unchecked(35.2, 129.0), DistanceMetric::Geodesic)
            .unwrap_err();
        assert!(matches!(err, SurveyError::EmptyCandidateSet));
    }

    #[test]
    fn test_missing_required_index_is_format_error() {
        let yaml = "points:\n  - id: A\n    lat: \"35;0;0\"\n    lon: \"129;0;0\"\n    svf: 0.5\n";
        assert!(PointSet::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_empty_document() {
        let (set, report) = PointSet::from_yaml_str("points: []").unwrap();
        assert!(set.is_empty());
        assert_eq!(report, LoadReport::default());
    }
}
