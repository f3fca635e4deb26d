//! Mock vitals repository for unit testing.
//!
//! This module provides a repository whose readings, failures and latency
//! are configurable, and which counts how often a check was saved.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::repository::VitalsRepository;
use super::types::VitalReadings;
use crate::error::RepositoryError;

/// Configuration for mock repository behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether to fail reading requests.
    pub fail_retrieval: bool,
    /// Whether to fail save requests.
    pub fail_save: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock vitals repository for testing.
#[derive(Debug, Clone)]
pub struct MockVitalsRepository {
    /// Mock configuration.
    config: MockConfig,
    /// Readings to return.
    readings: VitalReadings,
    /// Number of `save_new_vital_check` calls received.
    saves: Arc<AtomicUsize>,
}

impl MockVitalsRepository {
    /// Create a mock repository returning the given readings.
    pub fn with_readings<I, S>(readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(MockConfig::default()).readings(readings)
    }

    /// Create a mock repository with custom configuration and no readings.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            readings: Vec::new(),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock repository whose retrieval always fails.
    pub fn failing() -> Self {
        Self::with_config(MockConfig {
            fail_retrieval: true,
            ..Default::default()
        })
    }

    /// Replace the readings returned by this mock.
    pub fn readings<I, S>(mut self, readings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.readings = readings.into_iter().map(Into::into).collect();
        self
    }

    /// Number of saves received so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for MockVitalsRepository {
    fn default() -> Self {
        Self::with_config(MockConfig::default())
    }
}

#[async_trait]
impl VitalsRepository for MockVitalsRepository {
    async fn retrieve_vital_readings(
        &self,
        cancel: &CancellationToken,
    ) -> Result<VitalReadings, RepositoryError> {
        if self.config.latency_ms > 0 {
            tokio::select! {
                _ = cancel.cancelled() => return Err(RepositoryError::Cancelled),
                _ = tokio::time::sleep(Duration::from_millis(self.config.latency_ms)) => {}
            }
        }

        if cancel.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }

        if self.config.fail_retrieval {
            return Err(RepositoryError::Unavailable(
                "Mock retrieval failure".to_string(),
            ));
        }

        Ok(self.readings.clone())
    }

    async fn save_new_vital_check(&self) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);

        if self.config.fail_save {
            return Err(RepositoryError::Unavailable("Mock save failure".to_string()));
        }

        Ok(())
    }
}
