//! Startup state assembly from configuration.

use clap::Parser;
use pet_api::config::{DataArgs, KmaArgs};
use pet_api::state::AppState;
use survey::DistanceMetric;
use test_utils::fixtures::survey as survey_fixtures;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    data: DataArgs,
    #[command(flatten)]
    kma: KmaArgs,
}

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["pet-api"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_state_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let survey_path = dir.path().join("points.yaml");
    let model_path = dir.path().join("model.json");
    std::fs::write(&survey_path, survey_fixtures::CAMPUS_YAML).unwrap();
    std::fs::write(&model_path, r#"{"name":"fitted","coefficients":{"intercept":1.0}}"#).unwrap();

    let args = parse(&[
        "--survey-path",
        survey_path.to_str().unwrap(),
        "--model-path",
        model_path.to_str().unwrap(),
        "--distance-metric",
        "haversine",
    ]);
    let state = AppState::from_args(&args.data, &args.kma).unwrap();

    assert_eq!(state.load_report.total, 4);
    assert_eq!(state.load_report.valid, 3);
    assert_eq!(state.load_report.skipped, vec!["Broken Record".to_string()]);
    assert_eq!(state.model.name(), "fitted");
    assert_eq!(state.metric, DistanceMetric::Haversine);
    assert!(state.is_ready());
}

#[test]
fn test_default_model_is_heuristic() {
    let dir = tempfile::tempdir().unwrap();
    let survey_path = dir.path().join("points.json");
    std::fs::write(&survey_path, survey_fixtures::TWO_POINT_JSON).unwrap();

    let args = parse(&["--survey-path", survey_path.to_str().unwrap()]);
    let state = AppState::from_args(&args.data, &args.kma).unwrap();
    assert_eq!(state.model.name(), "heuristic");
    assert_eq!(state.metric, DistanceMetric::Geodesic);
}

#[test]
fn test_missing_survey_file_fails() {
    let args = parse(&["--survey-path", "/nonexistent/points.yaml"]);
    let err = AppState::from_args(&args.data, &args.kma).err().unwrap();
    assert!(format!("{:#}", err).contains("survey points"));
}

#[test]
fn test_bad_model_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let survey_path = dir.path().join("points.yaml");
    let model_path = dir.path().join("model.toml");
    std::fs::write(&survey_path, survey_fixtures::CAMPUS_YAML).unwrap();
    std::fs::write(&model_path, "intercept = 1").unwrap();

    let args = parse(&[
        "--survey-path",
        survey_path.to_str().unwrap(),
        "--model-path",
        model_path.to_str().unwrap(),
    ]);
    assert!(AppState::from_args(&args.data, &args.kma).is_err());
}
