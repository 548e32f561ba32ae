//! Carrier sales mock API server
//!
//! This library provides a mock freight-brokerage service: carrier
//! verification against a directory or the live FMCSA registry, load lookup
//! by reference number, and one-step offer evaluation.

pub mod core;
pub mod error;
pub mod middleware;
pub mod server_impl;
pub mod services;
pub mod state;
pub mod traits;

// Re-export main types
pub use error::{ServerError, ServerResult};
pub use server_impl::ApiServer;
pub use state::ServerState;

// Re-export trait definitions
pub use traits::{CarrierVerifier, LoadStore};

// Re-export service implementations
pub use services::{FmcsaRegistry, InMemoryLoadStore, StaticCarrierDirectory};
