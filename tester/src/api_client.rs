//! REST API client for the carrier sales server
//!
//! Typed reqwest wrapper used by the smoke scenarios. API-level failures
//! (4xx/5xx with a `detail` body) are data here, not transport errors, so
//! scenarios can assert on them.

use std::time::Duration;

use anyhow::{Result, bail};
use serde::de::DeserializeOwned;
use serde_json::json;

use shared::{ErrorDetail, EvaluateOfferResponse, LoadRecord, VerifyCarrierRequest, VerifyCarrierResponse};

/// Either an endpoint's success body or its error body
#[derive(Debug)]
pub enum ApiResult<T> {
    Success(T),
    Failure { status: reqwest::StatusCode, detail: String },
}

impl<T> ApiResult<T> {
    /// Unwrap the success body, failing with the API error otherwise
    pub fn success(self) -> Result<T> {
        match self {
            ApiResult::Success(body) => Ok(body),
            ApiResult::Failure { status, detail } => bail!("API error {status}: {detail}"),
        }
    }

    /// Unwrap the failure status and detail, failing on unexpected success
    pub fn failure(self) -> Result<(reqwest::StatusCode, String)> {
        match self {
            ApiResult::Success(_) => bail!("expected an API error, got a success response"),
            ApiResult::Failure { status, detail } => Ok((status, detail)),
        }
    }
}

/// REST API client for communicating with the server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(server_addr: &str, api_key: Option<String>) -> Self {
        let base_url = if server_addr.starts_with("http") {
            server_addr.to_string()
        } else {
            format!("http://{}", server_addr)
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, api_key, client }
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("X-API-Key", key),
            None => request,
        }
    }

    /// Read a response into the success body or the API error body
    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiResult<T>> {
        let status = response.status();
        if status.is_success() {
            Ok(ApiResult::Success(response.json().await?))
        } else {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .map(|body| body.detail)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            Ok(ApiResult::Failure { status, detail })
        }
    }

    /// Verify a carrier MC number
    pub async fn verify_carrier(&self, mc_number: &str) -> Result<ApiResult<VerifyCarrierResponse>> {
        let url = format!("{}/verify-carrier", self.base_url);
        let request = VerifyCarrierRequest { mc_number: mc_number.to_string() };

        let response = self.with_key(self.client.post(&url)).json(&request).send().await?;
        Self::read(response).await
    }

    /// Fetch a load by reference number, in any spelling
    pub async fn get_load(&self, reference_number: &str) -> Result<ApiResult<LoadRecord>> {
        let url = format!("{}/loads/{}", self.base_url, reference_number);

        let response = self.with_key(self.client.get(&url)).send().await?;
        Self::read(response).await
    }

    /// Evaluate an offer. `offer_attempt` is omitted from the request body
    /// when `None` so the server-side default applies.
    pub async fn evaluate_offer(
        &self,
        carrier_offer: i64,
        our_last_offer: i64,
        offer_attempt: Option<i64>,
    ) -> Result<ApiResult<EvaluateOfferResponse>> {
        let url = format!("{}/evaluate-offer", self.base_url);

        let mut body = json!({
            "carrier_offer": carrier_offer,
            "our_last_offer": our_last_offer,
        });
        if let Some(attempt) = offer_attempt {
            body["offer_attempt"] = json!(attempt);
        }

        let response = self.with_key(self.client.post(&url)).json(&body).send().await?;
        Self::read(response).await
    }

    /// Check if the server is responsive
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        Ok(response.status().is_success())
    }

    /// Wait for the server to be ready
    pub async fn wait_for_ready(&self, timeout: Duration) -> Result<()> {
        let start = std::time::Instant::now();

        while start.elapsed() < timeout {
            if self.health_check().await.unwrap_or(false) {
                tracing::info!("✅ Server is ready and responding");
                return Ok(());
            }

            tokio::time::sleep(Duration::from_millis(500)).await;
        }

        bail!("Server failed to become ready within {timeout:?}")
    }
}
