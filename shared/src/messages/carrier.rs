//! Carrier verification messages

use serde::{Deserialize, Serialize};

/// Request body for `POST /verify-carrier`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyCarrierRequest {
    pub mc_number: String,
}

/// Response body for a successfully verified carrier
///
/// `verified` is always true on the success path; unknown or inactive
/// carriers come back as a 404 error body instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyCarrierResponse {
    pub verified: bool,
    pub carrier_name: String,
}
