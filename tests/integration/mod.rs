//! Integration tests for the pulse check service.
//!
//! These drive the public router end to end, from the HTTP request down to
//! a repository, without binding a socket.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use pulse_check::api::{create_router, AppState, CheckPulseResponse};
use pulse_check::pulse::{CheckPulseUseCase, MockConfig, MockVitalsRepository};

/// Issue `GET /api/v1/pulse` against a router built on `repository`.
async fn check_pulse_with(repository: MockVitalsRepository) -> (StatusCode, CheckPulseResponse) {
    let state = AppState::new(Arc::new(CheckPulseUseCase::new(repository)));
    let app = create_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/pulse")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_good_vitals_are_recorded_once() {
    let repository = MockVitalsRepository::with_readings(["All", "Good!"]);

    let (status, body) = check_pulse_with(repository.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Pulse checked!");
    assert_eq!(repository.save_count(), 1);
}

#[tokio::test]
async fn test_empty_vitals_report_failure() {
    let repository = MockVitalsRepository::with_readings(Vec::<String>::new());

    let (status, body) = check_pulse_with(repository.clone()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Vitals were empty!");
    assert_eq!(repository.save_count(), 0);
}

#[tokio::test]
async fn test_unavailable_store_reports_retrieval_failure() {
    let repository = MockVitalsRepository::failing();

    let (status, body) = check_pulse_with(repository.clone()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message, "Failed to read any vitals!");
    assert_eq!(repository.save_count(), 0);
}

#[tokio::test]
async fn test_failed_save_still_reports_pulse_checked() {
    let repository = MockVitalsRepository::with_config(MockConfig {
        fail_save: true,
        ..Default::default()
    })
    .readings(["All", "Good"]);

    let (status, body) = check_pulse_with(repository.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.message, "Pulse checked!");
    assert_eq!(repository.save_count(), 1);
}
