//! Prometheus metrics for pulse checks.
//!
//! This module provides:
//! - Pulse check counters labelled by outcome
//! - Pulse check latency histogram
//! - Recorder installation for the `/metrics` endpoint

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::AppError;
use crate::pulse::CheckKind;

// === Metric Name Constants ===

/// Pulse checks counter metric name.
pub const METRIC_PULSE_CHECKS: &str = "pulse_checks_total";
/// Pulse check latency metric name.
pub const METRIC_PULSE_CHECK_LATENCY: &str = "pulse_check_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_PULSE_CHECKS,
        "Total number of pulse checks by outcome"
    );
    describe_histogram!(
        METRIC_PULSE_CHECK_LATENCY,
        "Pulse check latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the global Prometheus recorder and describe all metrics.
pub fn install_recorder() -> Result<PrometheusHandle, AppError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::Metrics(e.to_string()))?;
    init_metrics();
    Ok(handle)
}

/// Record a finished pulse check.
pub fn record_pulse_check(kind: CheckKind, start: Instant) {
    let label: &'static str = kind.into();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    counter!(METRIC_PULSE_CHECKS, "outcome" => label).increment(1);
    histogram!(METRIC_PULSE_CHECK_LATENCY, "outcome" => label).record(latency_ms);
}
