//! Survey file loading.

use std::path::Path;

use survey::{PointSet, SurveyError};
use test_utils::{fixtures::survey as fixtures, write_temp_file};

#[test]
fn test_load_yaml_file() {
    let (_dir, path) = write_temp_file("points.yaml", fixtures::CAMPUS_YAML);
    let (set, report) = PointSet::load(&path).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(report.valid, 3);
}

#[test]
fn test_load_yml_extension() {
    let (_dir, path) = write_temp_file("points.YML", fixtures::CAMPUS_YAML);
    let (set, _) = PointSet::load(&path).unwrap();
    assert_eq!(set.valid_count(), 3);
}

#[test]
fn test_load_json_file() {
    let (_dir, path) = write_temp_file("points.json", fixtures::TWO_POINT_JSON);
    let (set, report) = PointSet::load(&path).unwrap();
    assert_eq!(set.len(), 2);
    assert!(report.skipped.is_empty());
}

#[test]
fn test_unsupported_extension() {
    let (_dir, path) = write_temp_file("points.xlsx", "");
    assert!(matches!(
        PointSet::load(&path),
        Err(SurveyError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = PointSet::load(Path::new("/nonexistent/points.yaml"));
    assert!(matches!(result, Err(SurveyError::Io { .. })));
}

#[test]
fn test_malformed_document() {
    let (_dir, path) = write_temp_file("points.json", "{ \"points\": [ { \"id\": 1 } ] }");
    let err = PointSet::load(&path).unwrap_err();
    assert!(matches!(err, SurveyError::Format { .. }));
    assert!(err.to_string().contains("points.json"));
}

#[test]
fn test_blank_coordinate_cell_skips_only_that_row() {
    let yaml = r#"
points:
  - Location_Name: Gate
    Lat: "35;13;52.6"
    Lon: "129;5;4.2"
    SVF: 0.5
    GVI: 0.2
    BVI: 0.3
  - Location_Name: Blank
    Lat:
    Lon: "129;5;4.2"
    SVF: 0.5
    GVI: 0.2
    BVI: 0.3
"#;
    let (set, report) = PointSet::from_yaml_str(yaml).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.valid, 1);
    assert_eq!(report.skipped, vec!["Blank".to_string()]);
    assert_eq!(set.valid_count(), 1);
}

#[test]
fn test_boolean_coordinate_skips_only_that_row() {
    let json = r#"{"points":[
        {"id":"A","lat":35.0,"lon":129.0,"svf":0.5,"gvi":0.2,"bvi":0.3},
        {"id":"B","lat":true,"lon":129.1,"svf":0.5,"gvi":0.2,"bvi":0.3}
    ]}"#;
    let (set, report) = PointSet::from_json_str(json).unwrap();
    assert_eq!(report.valid, 1);
    assert_eq!(report.skipped, vec!["B".to_string()]);
    assert_eq!(set.find("a").map(|p| p.is_candidate()), Some(true));
}
