//! API key authentication middleware
//!
//! A shared-key gate over the business endpoints, checked against the
//! `X-API-Key` header. An unconfigured gate passes everything through,
//! which is how the demo usually runs locally.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use shared::ErrorDetail;

/// Expected API key for business endpoints, if one is configured
#[derive(Clone)]
pub struct ApiKeyGate {
    expected: Option<String>,
}

impl ApiKeyGate {
    /// Gate requiring the given key on every request it covers
    pub fn required(key: String) -> Self {
        Self { expected: Some(key) }
    }

    /// Disabled gate, every request passes
    pub fn open() -> Self {
        Self { expected: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.expected.is_some()
    }

    fn allows(&self, provided: Option<&str>) -> bool {
        match (&self.expected, provided) {
            (None, _) => true,
            (Some(expected), Some(provided)) => expected == provided,
            (Some(_), None) => false,
        }
    }
}

/// Middleware checking the `X-API-Key` header against the configured gate
pub async fn require_api_key(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let provided = request
        .headers()
        .get("X-API-Key")
        .and_then(|value| value.to_str().ok());

    if gate.allows(provided) {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Rejected request with missing or wrong API key");
        Err((StatusCode::UNAUTHORIZED, Json(ErrorDetail::new("Invalid API key"))).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_gate_allows_everything() {
        let gate = ApiKeyGate::open();
        assert!(!gate.is_enabled());
        assert!(gate.allows(None));
        assert!(gate.allows(Some("anything")));
    }

    #[test]
    fn test_required_gate_matches_exactly() {
        let gate = ApiKeyGate::required("secret".to_string());
        assert!(gate.is_enabled());
        assert!(gate.allows(Some("secret")));
        assert!(!gate.allows(Some("Secret")));
        assert!(!gate.allows(Some("")));
        assert!(!gate.allows(None));
    }
}
