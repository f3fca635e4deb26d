//! Vitals repository port and its in-memory implementation.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::types::VitalReadings;
use crate::error::RepositoryError;

/// Source of vital readings.
#[async_trait]
pub trait VitalsRepository: Send + Sync {
    /// Retrieve the current vital readings.
    ///
    /// Returns [`RepositoryError::Cancelled`] if `cancel` fires before the
    /// readings are available.
    async fn retrieve_vital_readings(
        &self,
        cancel: &CancellationToken,
    ) -> Result<VitalReadings, RepositoryError>;

    /// Record that a vital check took place.
    async fn save_new_vital_check(&self) -> Result<(), RepositoryError>;
}

/// Repository backed by a fixed set of readings.
#[derive(Debug, Clone)]
pub struct InMemoryVitalsRepository {
    readings: VitalReadings,
}

impl InMemoryVitalsRepository {
    /// Create a repository holding the stock readings `["All", "Good"]`.
    pub fn new() -> Self {
        Self {
            readings: vec!["All".to_string(), "Good".to_string()],
        }
    }
}

impl Default for InMemoryVitalsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VitalsRepository for InMemoryVitalsRepository {
    async fn retrieve_vital_readings(
        &self,
        cancel: &CancellationToken,
    ) -> Result<VitalReadings, RepositoryError> {
        if cancel.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }

        debug!(count = self.readings.len(), "Serving in-memory vital readings");
        Ok(self.readings.clone())
    }

    async fn save_new_vital_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
