//! Offer evaluation messages

use serde::{Deserialize, Serialize};

fn default_offer_attempt() -> i64 {
    1
}

/// Request body for `POST /evaluate-offer`
///
/// The endpoint is stateless; callers track `offer_attempt` across a
/// negotiation session. An omitted attempt counts as the first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateOfferRequest {
    pub carrier_offer: i64,
    pub our_last_offer: i64,
    #[serde(default = "default_offer_attempt")]
    pub offer_attempt: i64,
}

/// Outcome category of a single evaluation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferResult {
    Accept,
    Counter,
}

/// Response body for `POST /evaluate-offer`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateOfferResponse {
    pub result: OfferResult,
    pub new_offer: i64,
    pub message: String,
}
