//! Service trait definitions for dependency injection
//!
//! The load table and the carrier verifier are abstracted through these
//! traits so handlers can be exercised against mocks and the backing
//! implementation (builtin table, CSV file, live registry) is chosen once
//! at startup.

use async_trait::async_trait;

use crate::error::ServerResult;
use shared::{LoadRecord, McNumber};

/// Load table lookup service trait
///
/// Implementations are immutable after construction; lookups take the
/// normalized reference key, never the raw user input.
#[mockall::automock]
#[async_trait]
pub trait LoadStore: Send + Sync {
    /// Fetch the load for a normalized reference key
    async fn lookup(&self, key: &str) -> Option<LoadRecord>;

    /// Count of loads available
    async fn count(&self) -> usize;
}

/// Carrier verification service trait
#[mockall::automock]
#[async_trait]
pub trait CarrierVerifier: Send + Sync {
    /// Resolve an MC number to the carrier's legal name.
    ///
    /// Unknown or inactive carriers come back as `CarrierNotFound`;
    /// transport failures against a live registry as `RegistryUnavailable`.
    async fn verify(&self, mc_number: &McNumber) -> ServerResult<String>;
}
