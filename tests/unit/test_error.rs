use admission_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.to_string().starts_with("unexpected status: "));
    assert!(error.to_string().contains("500"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad token".to_string());
    assert_eq!(error.to_string(), "invalid input: bad token");
}

#[test]
fn test_app_error_status_for_unexpected() {
    let error = AppError::Unexpected(StatusCode::NOT_FOUND);
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_app_error_status_absent_for_local_errors() {
    assert_eq!(AppError::InvalidInput("x".to_string()).status(), None);
}

// Note: reqwest::Error cannot be easily constructed in tests
// This conversion is tested through integration tests

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match &app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
    assert!(app_error.to_string().starts_with("json error: "));
    assert!(app_error.source().is_some());
}
