//! Live FMCSA registry verifier
//!
//! Resolves carriers through the FMCSA QCMobile API by docket number.
//! Unknown carriers and registry outages stay distinct errors so the API
//! boundary can answer 404 versus 502.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ServerError, ServerResult};
use crate::traits::CarrierVerifier;
use shared::McNumber;

const DEFAULT_BASE_URL: &str = "https://mobile.fmcsa.dot.gov";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// FMCSA QCMobile registry client
pub struct FmcsaRegistry {
    base_url: String,
    web_key: String,
    client: reqwest::Client,
}

impl FmcsaRegistry {
    /// Create a client against the public registry
    pub fn new(web_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), web_key)
    }

    /// Create a client against a specific registry endpoint.
    ///
    /// Tests point this at a local mock server.
    pub fn with_base_url(base_url: String, web_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            web_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CarrierVerifier for FmcsaRegistry {
    async fn verify(&self, mc_number: &McNumber) -> ServerResult<String> {
        let docket = mc_number.docket();

        // The registry keys dockets numerically; anything else cannot exist
        // there, so skip the round trip.
        if docket.is_empty() || !docket.chars().all(|c| c.is_ascii_digit()) {
            return Err(ServerError::CarrierNotFound);
        }

        let url = format!(
            "{}/qc/services/carriers/docket-number/{}?webKey={}",
            self.base_url, docket, self.web_key
        );

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ServerError::RegistryUnavailable { message: e.to_string() })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ServerError::CarrierNotFound);
        }
        if !response.status().is_success() {
            return Err(ServerError::RegistryUnavailable {
                message: format!("registry answered HTTP {}", response.status()),
            });
        }

        let response_json: serde_json::Value = response.json().await.map_err(|e| {
            ServerError::RegistryUnavailable {
                message: format!("unreadable registry response: {e}"),
            }
        })?;

        let carrier = match response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|entry| entry.get("carrier"))
        {
            Some(carrier) => carrier,
            None => {
                debug!("Registry has no carrier entry for docket {}", docket);
                return Err(ServerError::CarrierNotFound);
            }
        };

        let allowed = carrier
            .get("allowedToOperate")
            .and_then(|value| value.as_str())
            .unwrap_or("N");
        if allowed != "Y" {
            debug!("Docket {} exists but is not allowed to operate", docket);
            return Err(ServerError::CarrierNotFound);
        }

        carrier
            .get("legalName")
            .and_then(|value| value.as_str())
            .map(|name| name.to_string())
            .ok_or_else(|| ServerError::RegistryUnavailable {
                message: "registry response missing legalName".to_string(),
            })
    }
}
