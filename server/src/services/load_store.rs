//! In-memory load table
//!
//! The table is built once at startup, from the builtin demo records or a
//! CSV file, and injected into the server immutable. Lookups never contend
//! with writers.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use crate::core::normalize_reference;
use crate::error::ServerResult;
use crate::traits::LoadStore;
use shared::LoadRecord;

/// Load table keyed by normalized reference
pub struct InMemoryLoadStore {
    loads: HashMap<String, LoadRecord>,
}

impl InMemoryLoadStore {
    /// Build a table from explicit records.
    ///
    /// Keys are normalized on the way in. Records whose reference normalizes
    /// to an empty key are unreachable through the API and get skipped; a
    /// later record with the same key replaces the earlier one.
    pub fn new(records: Vec<LoadRecord>) -> Self {
        let mut loads = HashMap::new();

        for record in records {
            let key = normalize_reference(&record.reference_number);
            if key.is_empty() {
                warn!(
                    "Skipping load {:?}: reference normalizes to an empty key",
                    record.reference_number
                );
                continue;
            }
            if let Some(previous) = loads.insert(key, record) {
                warn!("Replacing duplicate load reference {:?}", previous.reference_number);
            }
        }

        Self { loads }
    }

    /// The four demo loads the API ships with
    pub fn with_builtin_loads() -> Self {
        Self::new(builtin_loads())
    }

    /// Load a table from a CSV file.
    ///
    /// The file needs a header row with the `LoadRecord` field names, in any
    /// column order.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> ServerResult<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: LoadRecord = row?;
            records.push(record);
        }

        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

#[async_trait]
impl LoadStore for InMemoryLoadStore {
    async fn lookup(&self, key: &str) -> Option<LoadRecord> {
        self.loads.get(key).cloned()
    }

    async fn count(&self) -> usize {
        self.loads.len()
    }
}

/// Builtin demo records
fn builtin_loads() -> Vec<LoadRecord> {
    vec![
        LoadRecord {
            reference_number: "REF09460".to_string(),
            origin: "Denver, CO".to_string(),
            destination: "Detroit, MI".to_string(),
            equipment_type: "Dry Van".to_string(),
            rate: 868,
            commodity: "Automotive Parts".to_string(),
            mc_number: "MC123456".to_string(),
            is_partial: true,
            pickup_time: "15:00".to_string(),
            delivery_time: "Friday, July 12th".to_string(),
        },
        LoadRecord {
            reference_number: "REF04684".to_string(),
            origin: "Dallas, TX".to_string(),
            destination: "Chicago, IL".to_string(),
            equipment_type: "Dry Van or Flatbed".to_string(),
            rate: 570,
            commodity: "Agricultural Products".to_string(),
            mc_number: "MC789012".to_string(),
            is_partial: false,
            pickup_time: "14:00".to_string(),
            delivery_time: "Friday, July 12th".to_string(),
        },
        LoadRecord {
            reference_number: "REF09690".to_string(),
            origin: "Detroit, MI".to_string(),
            destination: "Nashville, TN".to_string(),
            equipment_type: "Dry Van".to_string(),
            rate: 1495,
            commodity: "Industrial Equipment".to_string(),
            mc_number: "MC345678".to_string(),
            is_partial: false,
            pickup_time: "13:00".to_string(),
            delivery_time: "Friday, July 12th".to_string(),
        },
        LoadRecord {
            reference_number: "REF90781".to_string(),
            origin: "San Diego, CA".to_string(),
            destination: "Phoenix, AZ".to_string(),
            equipment_type: "Reefer".to_string(),
            rate: 1200,
            commodity: "Produce".to_string(),
            mc_number: "MC789012".to_string(),
            is_partial: false,
            pickup_time: "16:00".to_string(),
            delivery_time: "Saturday, July 13th".to_string(),
        },
    ]
}
