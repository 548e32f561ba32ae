//! Request and response bodies for the carrier sales API
//!
//! This module organizes the wire types by endpoint:
//! - `carrier`: carrier verification
//! - `loads`: load lookup by reference number
//! - `offers`: offer evaluation

pub mod carrier;
pub mod loads;
pub mod offers;

// Re-export commonly used types at module level for convenience
pub use carrier::{VerifyCarrierRequest, VerifyCarrierResponse};

pub use loads::LoadRecord;

pub use offers::{EvaluateOfferRequest, EvaluateOfferResponse, OfferResult};
