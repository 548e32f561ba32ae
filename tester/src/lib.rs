//! Smoke testing library for the carrier sales API
//!
//! Drives a running server over HTTP and checks the canonical demo
//! behavior end to end.

pub mod api_client;
pub mod scenarios;

pub use api_client::{ApiClient, ApiResult};
pub use scenarios::TestScenarios;
