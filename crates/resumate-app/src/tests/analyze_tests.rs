use std::io::Write;
use std::time::Duration;

use resumate_core::FormError;
use resumate_types::Role;

use super::support::{MockService, Reply, app_state, scenario_result};
use crate::analyze::analyze_once;
use crate::cli::AnalyzeArgs;

fn args(file: Option<std::path::PathBuf>, requirements: &str) -> AnalyzeArgs {
    AnalyzeArgs {
        file,
        requirements: requirements.to_string(),
        role: Role::ItSupport,
        json: false,
    }
}

#[tokio::test]
async fn one_shot_submits_flags() {
    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(b"%PDF").unwrap();

    let service = MockService::new(Reply::Ok(scenario_result()), Duration::ZERO);
    let state = app_state(service.clone());

    let outcome = analyze_once(&state, &args(Some(file.path().to_path_buf()), "Python, SQL"))
        .await
        .unwrap();
    assert_eq!(outcome.unwrap(), scenario_result());

    let requests = service.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].role, Role::ItSupport);
    assert_eq!(requests[0].file.bytes, b"%PDF");
}

#[tokio::test]
async fn one_shot_without_file_is_validation_error() {
    let service = MockService::new(Reply::Ok(scenario_result()), Duration::ZERO);
    let state = app_state(service.clone());

    let outcome = analyze_once(&state, &args(None, "Python")).await.unwrap();
    let err = outcome.unwrap_err();
    assert!(matches!(err, FormError::MissingFile));
    assert!(err.is_validation());
    assert_eq!(service.calls(), 0);
}

#[tokio::test]
async fn one_shot_missing_path_is_an_error() {
    let service = MockService::new(Reply::Ok(scenario_result()), Duration::ZERO);
    let state = app_state(service);

    let missing = std::path::PathBuf::from("/definitely/not/here.pdf");
    assert!(analyze_once(&state, &args(Some(missing), "Python")).await.is_err());
}
