//! Unified error types for the pulse check service.

use thiserror::Error;

/// Top-level error type for the application shell.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Metrics recorder could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a vitals repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached or read.
    #[error("vitals store unavailable: {0}")]
    Unavailable(String),

    /// The caller cancelled the operation while it was pending.
    #[error("repository operation cancelled")]
    Cancelled,
}

/// Undeclared failures raised while running a use case.
///
/// These never become a failure outcome. The transport layer turns them
/// into a generic error response without exposing the details.
#[derive(Error, Debug)]
pub enum PulseFault {
    /// The operation was cancelled mid-flight.
    #[error("pulse check cancelled")]
    Cancelled,

    /// A repository call failed where no failure outcome is declared.
    #[error("repository fault: {0}")]
    Repository(#[from] RepositoryError),

    /// The use case panicked.
    #[error("use case panicked: {0}")]
    Panicked(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, AppError>;
