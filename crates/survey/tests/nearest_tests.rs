//! Nearest-point resolution over survey point sets.

use pet_common::Coordinate;
use survey::{
    resolve_nearest, DistanceMetric, MeasurementPoint, PointSet, SurveyError, ViewIndices,
};
use test_utils::fixtures::{places, survey as fixtures};

const METRICS: [DistanceMetric; 2] = [DistanceMetric::Geodesic, DistanceMetric::Haversine];

const INDICES: ViewIndices = ViewIndices {
    svf: 0.5,
    gvi: 0.2,
    bvi: 0.3,
};

fn point(id: &str, lat: f64, lon: f64) -> MeasurementPoint {
    MeasurementPoint::new(id, Some(Coordinate::new_unchecked(lat, lon)), INDICES)
}

// ============================================================================
// Correctness
// ============================================================================

#[test]
fn test_triangle_vertices_resolve_to_themselves() {
    let points = vec![
        point("north", 35.2400, 129.0840),
        point("southwest", 35.2250, 129.0750),
        point("southeast", 35.2250, 129.0930),
    ];

    for metric in METRICS {
        for (i, p) in points.iter().enumerate() {
            let c = p.coordinate.unwrap();
            let nearest = resolve_nearest(c.lat, c.lon, &points, metric).unwrap();
            assert_eq!(nearest.index, i);
            assert_eq!(nearest.point.id, p.id);
            assert!(nearest.distance_m.abs() < 1e-6, "{metric}: {}", nearest.distance_m);
        }
    }
}

#[test]
fn test_two_point_scenario() {
    let (set, report) = PointSet::from_json_str(fixtures::TWO_POINT_JSON).unwrap();
    assert_eq!(report.valid, 2);

    for metric in METRICS {
        let query = Coordinate::new(35.05, 129.05).unwrap();
        let nearest = set.nearest(query, metric).unwrap();
        assert_eq!(nearest.point.id, "A", "{metric}");

        let other = set.find("B").unwrap();
        let other_distance = metric.distance_m(query, other.coordinate.unwrap());
        assert!(nearest.distance_m < other_distance);

        // Reproducible
        for _ in 0..5 {
            let again = set.nearest(query, metric).unwrap();
            assert_eq!(again.index, nearest.index);
            assert_eq!(again.distance_m, nearest.distance_m);
        }
    }
}

#[test]
fn test_campus_query_selects_main_gate() {
    let (set, _) = PointSet::from_yaml_str(fixtures::CAMPUS_YAML).unwrap();
    let query = Coordinate::new(places::PNU_CAMPUS.0, places::PNU_CAMPUS.1).unwrap();
    let nearest = set.nearest(query, DistanceMetric::Geodesic).unwrap();
    assert_eq!(nearest.point.id, "PNU Main Gate");
    // ~140 m south of the map center
    assert!(nearest.distance_m > 100.0 && nearest.distance_m < 200.0, "{}", nearest.distance_m);
}

// ============================================================================
// Tie-break
// ============================================================================

#[test]
fn test_duplicate_coordinates_pick_first() {
    let points = vec![
        point("first", 35.2, 129.0),
        point("second", 35.2, 129.0),
        point("third", 35.2, 129.0),
    ];
    for metric in METRICS {
        for _ in 0..10 {
            let nearest = resolve_nearest(35.3, 129.1, &points, metric).unwrap();
            assert_eq!(nearest.point.id, "first");
            assert_eq!(nearest.index, 0);
        }
    }
}

#[test]
fn test_mirrored_points_pick_lower_index() {
    // Same latitude, longitudes mirrored around the query
    let points = vec![point("east", 35.0, 129.5), point("west", 35.0, 128.5)];
    for metric in METRICS {
        let a = metric.distance_m(Coordinate::new_unchecked(35.0, 129.0), points[0].coordinate.unwrap());
        let b = metric.distance_m(Coordinate::new_unchecked(35.0, 129.0), points[1].coordinate.unwrap());
        assert_eq!(a, b, "{metric} distances should tie");

        let nearest = resolve_nearest(35.0, 129.0, &points, metric).unwrap();
        assert_eq!(nearest.point.id, "east");

        let reversed: Vec<MeasurementPoint> = points.iter().rev().cloned().collect();
        let nearest = resolve_nearest(35.0, 129.0, &reversed, metric).unwrap();
        assert_eq!(nearest.point.id, "west");
    }
}

// ============================================================================
// Malformed records
// ============================================================================

#[test]
fn test_malformed_record_never_selected() {
    let yaml = r#"points:
  - id: broken
    lat: "bad;data"
    lon: "129;0;0"
    svf: 0.1
    gvi: 0.1
    bvi: 0.1
  - id: far
    lat: "36;0;0"
    lon: "130;0;0"
    svf: 0.2
    gvi: 0.2
    bvi: 0.2
"#;
    let (set, report) = PointSet::from_yaml_str(yaml).unwrap();
    assert_eq!(report.skipped, vec!["broken".to_string()]);

    for &(lat, lon) in &[(35.0, 129.0), (35.5, 129.0), places::BUSAN, places::SEOUL] {
        let query = Coordinate::new(lat, lon).unwrap();
        let nearest = set.nearest(query, DistanceMetric::Geodesic).unwrap();
        assert_eq!(nearest.point.id, "far");
        assert_eq!(nearest.index, 1);
    }
}

#[test]
fn test_campus_broken_record_excluded() {
    let (set, _) = PointSet::from_yaml_str(fixtures::CAMPUS_YAML).unwrap();
    for metric in METRICS {
        for &(lat, lon) in &[places::PNU_CAMPUS, places::BUSAN, places::DEFAULT_SNAPSHOT] {
            let nearest = set.nearest(Coordinate::new(lat, lon).unwrap(), metric).unwrap();
            assert_ne!(nearest.point.id, "Broken Record");
        }
    }
}

#[test]
fn test_no_candidates_is_explicit_failure() {
    let (set, _) = PointSet::from_yaml_str(fixtures::ALL_BROKEN_YAML).unwrap();
    let result = set.nearest(Coordinate::new_unchecked(35.0, 129.0), DistanceMetric::Geodesic);
    assert!(matches!(result, Err(SurveyError::EmptyCandidateSet)));
}

#[test]
fn test_resolution_does_not_mutate_points() {
    let (set, _) = PointSet::from_yaml_str(fixtures::CAMPUS_YAML).unwrap();
    let before = set.points().to_vec();
    let _ = set.nearest(Coordinate::new_unchecked(35.23, 129.08), DistanceMetric::Geodesic);
    assert_eq!(set.points(), before.as_slice());
}
