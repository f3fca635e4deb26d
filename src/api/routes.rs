//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{check_pulse, health, metrics, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        // Use case endpoints
        .route("/api/v1/pulse", get(check_pulse))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::tests::StubUseCase;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(AppState::in_memory());

        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn pulse_endpoint_returns_ok_with_in_memory_repository() {
        let app = create_router(AppState::in_memory());

        let (status, body) = get_json(app, "/api/v1/pulse").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Pulse checked!" }));
    }

    #[tokio::test]
    async fn pulse_endpoint_returns_failure_message() {
        let stub = StubUseCase::Fail(Some("Vitals were empty!".to_string()));
        let app = create_router(AppState::new(Arc::new(stub)));

        let (status, body) = get_json(app, "/api/v1/pulse").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Vitals were empty!" }));
    }

    #[tokio::test]
    async fn pulse_endpoint_hides_panic_details() {
        let app = create_router(AppState::new(Arc::new(StubUseCase::Panic)));

        let (status, body) = get_json(app, "/api/v1/pulse").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Unrecoverable error encountered." }));
    }

    #[tokio::test]
    async fn pulse_endpoint_fails_after_shutdown() {
        let state = AppState::in_memory();
        state.shutdown.cancel();
        let app = create_router(state);

        let (status, body) = get_json(app, "/api/v1/pulse").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "message": "Unrecoverable error encountered." }));
    }

    #[tokio::test]
    async fn metrics_endpoint_returns_404_without_recorder() {
        let app = create_router(AppState::in_memory());

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
