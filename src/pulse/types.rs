//! Pulse check data types.

use strum::{Display, IntoStaticStr};

/// Ordered snapshot of vital readings returned by a repository.
pub type VitalReadings = Vec<String>;

/// Failure message when readings could not be retrieved.
pub const RETRIEVAL_FAILED_MESSAGE: &str = "Failed to read any vitals!";

/// Failure message when the repository returned no readings.
pub const EMPTY_READINGS_MESSAGE: &str = "Vitals were empty!";

/// Result of a pulse check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PulseOutcome {
    /// Vitals were read and the check was submitted for recording.
    Success,
    /// The check could not be completed.
    Failure {
        /// Explanation for the caller, if one is available.
        message: Option<String>,
    },
}

impl PulseOutcome {
    /// Build a failure carrying the given message.
    pub fn failure(message: impl Into<String>) -> Self {
        PulseOutcome::Failure {
            message: Some(message.into()),
        }
    }

    /// Check if the outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, PulseOutcome::Success)
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            PulseOutcome::Success => None,
            PulseOutcome::Failure { message } => message.as_deref(),
        }
    }

    /// Metric label for this outcome.
    pub fn kind(&self) -> CheckKind {
        match self {
            PulseOutcome::Success => CheckKind::Success,
            PulseOutcome::Failure { .. } => CheckKind::Failure,
        }
    }
}

/// How a pulse check request ended, as seen by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CheckKind {
    /// The use case reported success.
    Success,
    /// The use case reported a declared failure.
    Failure,
    /// The use case faulted or panicked.
    Fault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_carries_message() {
        let outcome = PulseOutcome::failure(EMPTY_READINGS_MESSAGE);
        assert!(!outcome.is_success());
        assert_eq!(outcome.error_message(), Some("Vitals were empty!"));
        assert_eq!(outcome.kind(), CheckKind::Failure);
    }

    #[test]
    fn success_has_no_message() {
        let outcome = PulseOutcome::Success;
        assert!(outcome.is_success());
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn check_kind_labels_are_lowercase() {
        let label: &'static str = CheckKind::Fault.into();
        assert_eq!(label, "fault");
        assert_eq!(CheckKind::Success.to_string(), "success");
    }
}
