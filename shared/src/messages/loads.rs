//! Load lookup messages

use serde::{Deserialize, Serialize};

/// A bookable load, served whole by `GET /loads/{reference_number}`
///
/// `reference_number` keeps its original spelling (`REF09460`) even though
/// lookups run on the normalized key. Times are free-form strings, matching
/// the demo data this API mocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadRecord {
    pub reference_number: String,
    pub origin: String,
    pub destination: String,
    pub equipment_type: String,
    pub rate: i64,
    pub commodity: String,
    pub mc_number: String,
    pub is_partial: bool,
    pub pickup_time: String,
    pub delivery_time: String,
}
