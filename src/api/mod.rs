//! HTTP API module for the pulse check, health, and metrics endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::{execute_check_pulse, AppState, CheckPulseResponse};
pub use routes::create_router;
