//! Main server implementation
//!
//! This module contains the ApiServer struct that wires the injected load
//! table and carrier verifier into an axum router, plus the HTTP handlers
//! for every endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    middleware as axum_middleware,
    response::Json,
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::core::{evaluate_offer, normalize_reference};
use crate::error::{ServerError, ServerResult};
use crate::middleware::{ApiKeyGate, require_api_key};
use crate::state::ServerState;
use crate::traits::{CarrierVerifier, LoadStore};
use shared::{
    EvaluateOfferRequest, EvaluateOfferResponse, LoadRecord, McNumber, VerifyCarrierRequest,
    VerifyCarrierResponse,
};

/// Main server struct with dependency injection
pub struct ApiServer<L, C>
where
    L: LoadStore,
    C: CarrierVerifier,
{
    state: Arc<ServerState>,
    loads: Arc<L>,
    carriers: Arc<C>,
    gate: ApiKeyGate,
}

// Manual impl keeps Clone bounds off the injected service types
impl<L, C> Clone for ApiServer<L, C>
where
    L: LoadStore,
    C: CarrierVerifier,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            loads: Arc::clone(&self.loads),
            carriers: Arc::clone(&self.carriers),
            gate: self.gate.clone(),
        }
    }
}

impl<L, C> ApiServer<L, C>
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    /// Create a new server around an immutable store and verifier
    pub fn new(loads: L, carriers: C, gate: ApiKeyGate) -> Self {
        Self {
            state: Arc::new(ServerState::new()),
            loads: Arc::new(loads),
            carriers: Arc::new(carriers),
            gate,
        }
    }

    /// Build the Axum router with all routes.
    ///
    /// Business endpoints sit behind the API key gate; the health check
    /// stays open so probes work without credentials.
    pub fn build_router(&self) -> Router {
        let business_routes = Router::new()
            .route("/verify-carrier", post(verify_carrier_handler))
            .route("/loads/:reference_number", get(get_load_handler))
            .route("/evaluate-offer", post(evaluate_offer_handler))
            .route_layer(axum_middleware::from_fn_with_state(
                self.gate.clone(),
                require_api_key,
            ));

        Router::new()
            .merge(business_routes)
            // Health check
            .route("/health", get(health_handler))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()) // Allow CORS for demo tooling
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Start the server and block until shutdown
    pub async fn run(&self, bind_address: SocketAddr) -> ServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| {
                ServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}"))
            })?;

        info!("🚛 Carrier sales API listening on http://{bind_address}");
        if self.gate.is_enabled() {
            info!("🔑 API key gate enabled for business endpoints");
        }

        let server_task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Server error: {e}");
            }
        });

        tokio::select! {
            _ = server_task => {
                info!("HTTP server task completed");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received shutdown signal");
            }
        }

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<ServerState> {
        &self.state
    }
}

// HTTP Handlers

/// Verify a carrier's MC number
async fn verify_carrier_handler<L, C>(
    State(server): State<ApiServer<L, C>>,
    Json(request): Json<VerifyCarrierRequest>,
) -> Result<Json<VerifyCarrierResponse>, ServerError>
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    server.state.record_carrier_verification();

    let mc_number = McNumber::parse(&request.mc_number)?;
    let carrier_name = server.carriers.verify(&mc_number).await?;

    info!("✅ Verified carrier {mc_number} ({carrier_name})");

    Ok(Json(VerifyCarrierResponse {
        verified: true,
        carrier_name,
    }))
}

/// Look up a load by reference number
async fn get_load_handler<L, C>(
    State(server): State<ApiServer<L, C>>,
    Path(reference_number): Path<String>,
) -> Result<Json<LoadRecord>, ServerError>
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    server.state.record_load_lookup();

    let key = normalize_reference(&reference_number);
    if key.is_empty() {
        return Err(ServerError::InvalidReference);
    }

    match server.loads.lookup(&key).await {
        Some(record) => Ok(Json(record)),
        None => Err(ServerError::LoadNotFound),
    }
}

/// Evaluate a negotiation offer
async fn evaluate_offer_handler<L, C>(
    State(server): State<ApiServer<L, C>>,
    Json(request): Json<EvaluateOfferRequest>,
) -> Json<EvaluateOfferResponse>
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    server.state.record_offer_evaluation();

    let decision = evaluate_offer(
        request.carrier_offer,
        request.our_last_offer,
        request.offer_attempt,
    );

    Json(EvaluateOfferResponse {
        result: decision.result,
        new_offer: decision.new_offer,
        message: decision.message,
    })
}

/// Health check endpoint
async fn health_handler<L, C>(
    State(server): State<ApiServer<L, C>>,
) -> Json<serde_json::Value>
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": server.state.get_uptime_seconds(),
        "loads_available": server.loads.count().await,
        "requests": {
            "verify_carrier": server.state.get_carrier_verifications(),
            "loads": server.state.get_load_lookups(),
            "evaluate_offer": server.state.get_offer_evaluations(),
        }
    }))
}
