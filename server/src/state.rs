//! Server state management
//!
//! Uptime and per-endpoint request counters reported by the health endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Core server state
///
/// Counters track handled requests per endpoint, whatever the outcome.
#[derive(Debug)]
pub struct ServerState {
    pub server_start_time: Instant,
    pub carrier_verifications: AtomicU64,
    pub load_lookups: AtomicU64,
    pub offer_evaluations: AtomicU64,
}

impl ServerState {
    /// Create a new server state
    pub fn new() -> Self {
        Self {
            server_start_time: Instant::now(),
            carrier_verifications: AtomicU64::new(0),
            load_lookups: AtomicU64::new(0),
            offer_evaluations: AtomicU64::new(0),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Record a carrier verification request
    pub fn record_carrier_verification(&self) -> u64 {
        self.carrier_verifications.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record a load lookup request
    pub fn record_load_lookup(&self) -> u64 {
        self.load_lookups.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record an offer evaluation request
    pub fn record_offer_evaluation(&self) -> u64 {
        self.offer_evaluations.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn get_carrier_verifications(&self) -> u64 {
        self.carrier_verifications.load(Ordering::Relaxed)
    }

    pub fn get_load_lookups(&self) -> u64 {
        self.load_lookups.load(Ordering::Relaxed)
    }

    pub fn get_offer_evaluations(&self) -> u64 {
        self.offer_evaluations.load(Ordering::Relaxed)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
