//! HTTP API handlers.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::FutureExt;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::error::PulseFault;
use crate::metrics::record_pulse_check;
use crate::pulse::{
    CheckKind, CheckPulseUseCase, InMemoryVitalsRepository, PulseOutcome, UseCase, DEFAULT_INPUT,
};

/// Message returned when the use case succeeds.
pub const PULSE_CHECKED_MESSAGE: &str = "Pulse checked!";

/// Message returned when the use case faults.
pub const UNRECOVERABLE_MESSAGE: &str = "Unrecoverable error encountered.";

/// Shared handle to the pulse check use case.
pub type DynCheckPulse = Arc<dyn UseCase<String, Output = PulseOutcome>>;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pulse check use case.
    pub check_pulse: DynCheckPulse,
    /// Root cancellation token, cancelled on shutdown.
    pub shutdown: CancellationToken,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around the given use case.
    pub fn new(check_pulse: DynCheckPulse) -> Self {
        Self {
            check_pulse,
            shutdown: CancellationToken::new(),
            metrics: None,
        }
    }

    /// Create app state backed by the in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CheckPulseUseCase::new(
            InMemoryVitalsRepository::new(),
        )))
    }

    /// Use `token` as the root cancellation token.
    pub fn with_shutdown(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Expose metrics rendered by `handle`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Pulse check endpoint response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckPulseResponse {
    /// Human-readable result.
    pub message: String,
}

impl CheckPulseResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Metrics handler - Prometheus text format, or 404 when disabled.
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "metrics disabled").into_response(),
    }
}

/// Pulse check handler.
pub async fn check_pulse(State(state): State<AppState>) -> impl IntoResponse {
    let cancel = state.shutdown.child_token();
    execute_check_pulse(state.check_pulse.as_ref(), &cancel).await
}

/// Run the pulse check use case and map its result to a status and body.
///
/// Success maps to 200. A declared failure maps to 500 with the failure
/// message. A fault or panic maps to 500 with a fixed message.
pub async fn execute_check_pulse(
    use_case: &dyn UseCase<String, Output = PulseOutcome>,
    cancel: &CancellationToken,
) -> (StatusCode, Json<CheckPulseResponse>) {
    let start = Instant::now();
    let run = AssertUnwindSafe(async { use_case.run(DEFAULT_INPUT.to_string(), cancel).await })
        .catch_unwind()
        .await;

    let result = match run {
        Ok(result) => result,
        Err(payload) => Err(PulseFault::Panicked(panic_message(payload.as_ref()))),
    };

    let (kind, status, body) = match result {
        Ok(PulseOutcome::Success) => {
            info!("Pulse checked!");
            (
                CheckKind::Success,
                StatusCode::OK,
                CheckPulseResponse::new(PULSE_CHECKED_MESSAGE),
            )
        }
        Ok(outcome) => {
            let message = outcome.error_message().unwrap_or_default();
            error!(error_message = %message, "Pulse check failed");
            (
                outcome.kind(),
                StatusCode::INTERNAL_SERVER_ERROR,
                CheckPulseResponse::new(message),
            )
        }
        Err(fault) => {
            error!(error = %fault, "There was an unrecoverable error while pulse checking");
            (
                CheckKind::Fault,
                StatusCode::INTERNAL_SERVER_ERROR,
                CheckPulseResponse::new(UNRECOVERABLE_MESSAGE),
            )
        }
    };

    record_pulse_check(kind, start);
    (status, Json(body))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
