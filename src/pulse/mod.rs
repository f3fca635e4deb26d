//! Pulse check module.
//!
//! This module handles:
//! - Vital readings and outcome types
//! - The vitals repository port and its in-memory implementation
//! - The pulse check use case
//! - Mock repository for testing

pub mod mock;
pub mod repository;
pub mod types;
pub mod use_case;

pub use mock::{MockConfig, MockVitalsRepository};
pub use repository::{InMemoryVitalsRepository, VitalsRepository};
pub use types::{CheckKind, PulseOutcome, VitalReadings};
pub use use_case::{CheckPulseUseCase, UseCase};

/// Input the HTTP endpoint hands to the pulse check use case.
pub const DEFAULT_INPUT: &str = "Default use case input.";
