//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Motor carrier number as supplied by callers, e.g. `MC123456`.
///
/// Parsing trims surrounding whitespace and requires the literal `MC`
/// prefix. Nothing else is validated here; whether the docket exists is a
/// question for the verifier behind the API.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct McNumber(String);

/// Rejection for MC numbers missing the `MC` prefix
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid MC number format. Must start with 'MC'.")]
pub struct InvalidMcNumber;

impl McNumber {
    pub fn parse(raw: &str) -> Result<Self, InvalidMcNumber> {
        let trimmed = raw.trim();
        if !trimmed.starts_with("MC") {
            return Err(InvalidMcNumber);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Full MC number including the prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Docket portion, everything after the `MC` prefix
    pub fn docket(&self) -> &str {
        &self.0[2..]
    }
}

impl fmt::Display for McNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error body returned by every failing endpoint: `{"detail": "..."}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
