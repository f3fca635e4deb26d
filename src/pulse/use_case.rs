//! Use case port and the pulse check use case.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use super::repository::VitalsRepository;
use super::types::{PulseOutcome, EMPTY_READINGS_MESSAGE, RETRIEVAL_FAILED_MESSAGE};
use crate::error::{PulseFault, RepositoryError};

/// An application use case taking an input of type `I`.
///
/// Declared failures belong in `Output`. `Err` is reserved for faults the
/// caller is not expected to handle beyond reporting.
#[async_trait]
pub trait UseCase<I>: Send + Sync {
    /// Outcome reported on completion.
    type Output;

    /// Execute the use case.
    async fn run(&self, input: I, cancel: &CancellationToken)
        -> Result<Self::Output, PulseFault>;
}

/// Verifies the application's operational state by reading vitals.
#[derive(Debug, Clone)]
pub struct CheckPulseUseCase<R> {
    repository: R,
}

impl<R: VitalsRepository> CheckPulseUseCase<R> {
    /// Create a use case reading from `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: VitalsRepository> UseCase<String> for CheckPulseUseCase<R> {
    type Output = PulseOutcome;

    #[instrument(skip(self, cancel))]
    async fn run(
        &self,
        input: String,
        cancel: &CancellationToken,
    ) -> Result<PulseOutcome, PulseFault> {
        let readings = match self.repository.retrieve_vital_readings(cancel).await {
            Ok(readings) => readings,
            Err(RepositoryError::Cancelled) => return Err(PulseFault::Cancelled),
            Err(e) => {
                error!(error = %e, "There was an error while reading vitals");
                return Ok(PulseOutcome::failure(RETRIEVAL_FAILED_MESSAGE));
            }
        };

        if readings.is_empty() {
            error!("Vital readings came back empty");
            return Ok(PulseOutcome::failure(EMPTY_READINGS_MESSAGE));
        }

        info!(input = %input, readings = ?readings, "We are up and running!");
        if let Err(e) = self.repository.save_new_vital_check().await {
            warn!(error = %e, "Failed to record vital check");
        }

        Ok(PulseOutcome::Success)
    }
}
