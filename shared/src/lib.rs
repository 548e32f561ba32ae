//! Shared types for the carrier sales mock API
//!
//! Contains the wire types spoken by both the server and the tester, plus
//! logging setup. Component-internal types (stores, verifiers, server state)
//! stay in their respective components.

pub mod logging;
pub mod messages;
pub mod types;

pub use types::*;

// Re-export request/response bodies by endpoint
pub use messages::{
    // Carrier verification
    VerifyCarrierRequest, VerifyCarrierResponse,

    // Load lookup
    LoadRecord,

    // Offer evaluation
    EvaluateOfferRequest, EvaluateOfferResponse, OfferResult,
};
