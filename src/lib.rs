//! Pulse check service.
//!
//! A layered service scaffold: an HTTP endpoint calls a use case, which
//! reads from a repository. The single flow, "check pulse", reads the
//! service's vital readings, records the check, and reports the result:
//!
//! ```text
//! GET /api/v1/pulse
//!   200 {"message": "Pulse checked!"}
//!   500 {"message": "Vitals were empty!"}
//!   500 {"message": "Unrecoverable error encountered."}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`pulse`]: Repository, use case, and outcome types
//! - [`api`]: HTTP API for the pulse check, health, and metrics
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pulse;
pub mod utils;

pub use config::Config;
pub use error::{AppError, PulseFault, RepositoryError, Result};
