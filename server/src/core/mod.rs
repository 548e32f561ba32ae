//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod negotiation;
pub mod reference;

// Re-export commonly used types
pub use negotiation::{OfferDecision, evaluate_offer};
pub use reference::normalize_reference;
