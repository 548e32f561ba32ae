//! Static carrier directory
//!
//! The builtin known-carrier table. Immutable after construction and
//! injected at startup, same as the load table.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{ServerError, ServerResult};
use crate::traits::CarrierVerifier;
use shared::McNumber;

/// In-memory MC number to carrier name directory
pub struct StaticCarrierDirectory {
    carriers: HashMap<String, String>,
}

impl StaticCarrierDirectory {
    /// Build a directory from explicit (MC number, carrier name) entries
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self {
            carriers: entries.into_iter().collect(),
        }
    }

    /// The three demo carriers the API ships with
    pub fn with_builtin_carriers() -> Self {
        Self::new(vec![
            ("MC123456".to_string(), "ABC Trucking".to_string()),
            ("MC789012".to_string(), "XYZ Freight".to_string()),
            ("MC345678".to_string(), "Delta Logistics".to_string()),
        ])
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

#[async_trait]
impl CarrierVerifier for StaticCarrierDirectory {
    async fn verify(&self, mc_number: &McNumber) -> ServerResult<String> {
        self.carriers
            .get(mc_number.as_str())
            .cloned()
            .ok_or(ServerError::CarrierNotFound)
    }
}
