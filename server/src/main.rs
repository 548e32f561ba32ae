//! Carrier sales API entry point
//!
//! Picks the load table and carrier verifier from the command line, wires
//! them into the server, and runs until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use server::{
    ApiServer, ServerError, ServerResult,
    middleware::ApiKeyGate,
    services::{FmcsaRegistry, InMemoryLoadStore, StaticCarrierDirectory},
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Mock API for verifying carriers, retrieving loads, and evaluating offers")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// CSV file to read the load table from (builtin demo records when omitted)
    #[arg(long)]
    loads_csv: Option<PathBuf>,

    /// Verify carriers against the live FMCSA registry instead of the
    /// builtin directory (requires FMCSA_WEBKEY)
    #[arg(long)]
    fmcsa: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let args = Args::parse();

    // Pick up CARRIER_API_KEY / FMCSA_WEBKEY from a local .env if present
    let _ = dotenv::dotenv();

    shared::logging::init_tracing("server", Some(&args.log_level));

    let bind_address: SocketAddr = format!("0.0.0.0:{}", args.port)
        .parse()
        .map_err(|e| ServerError::Config(format!("Invalid port: {e}")))?;

    let loads = match &args.loads_csv {
        Some(path) => {
            let store = InMemoryLoadStore::from_csv_path(path)?;
            info!("📦 Loaded {} loads from {}", store.len(), path.display());
            store
        }
        None => {
            info!("📦 Using builtin demo loads");
            InMemoryLoadStore::with_builtin_loads()
        }
    };

    let gate = match std::env::var("CARRIER_API_KEY") {
        Ok(key) if !key.is_empty() => {
            info!("🔑 API key gate configured from CARRIER_API_KEY");
            ApiKeyGate::required(key)
        }
        _ => {
            warn!("CARRIER_API_KEY not set; business endpoints are open");
            ApiKeyGate::open()
        }
    };

    if args.fmcsa {
        let web_key = std::env::var("FMCSA_WEBKEY").map_err(|_| {
            ServerError::Config("FMCSA_WEBKEY must be set for live registry verification".to_string())
        })?;
        info!("🛰️ Verifying carriers against the live FMCSA registry");

        let server = ApiServer::new(loads, FmcsaRegistry::new(web_key), gate);
        server.run(bind_address).await
    } else {
        info!("🗂️ Verifying carriers against the builtin directory");

        let server = ApiServer::new(loads, StaticCarrierDirectory::with_builtin_carriers(), gate);
        server.run(bind_address).await
    }
}
