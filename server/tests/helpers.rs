//! Test helper utilities for server integration tests

use std::net::SocketAddr;

use server::ApiServer;
use server::middleware::ApiKeyGate;
use server::services::{InMemoryLoadStore, StaticCarrierDirectory};
use server::traits::{CarrierVerifier, LoadStore};

/// Spawn an API server on an ephemeral port and return its address
pub async fn spawn_server<L, C>(loads: L, carriers: C, gate: ApiKeyGate) -> SocketAddr
where
    L: LoadStore + 'static,
    C: CarrierVerifier + 'static,
{
    let server = ApiServer::new(loads, carriers, gate);
    let router = server.build_router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Spawn a server with the builtin demo loads and carriers
pub async fn spawn_demo_server(gate: ApiKeyGate) -> SocketAddr {
    spawn_server(
        InMemoryLoadStore::with_builtin_loads(),
        StaticCarrierDirectory::with_builtin_carriers(),
        gate,
    )
    .await
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{addr}")
}
