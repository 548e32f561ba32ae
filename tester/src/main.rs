//! Smoke test runner for the carrier sales API
//!
//! Points the scenario suite at a running server, waits for it to come up,
//! and fails loudly on any drift from the canonical demo behavior.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::time::timeout;

use tester::{ApiClient, TestScenarios};

#[derive(Parser)]
#[command(name = "tester")]
#[command(about = "Smoke tester for the carrier sales API")]
struct Args {
    /// Server address (host:port or full URL)
    #[arg(long, default_value = "127.0.0.1:8000")]
    server_addr: String,

    /// API key to send in X-API-Key, when the server gate is enabled
    #[arg(long)]
    api_key: Option<String>,

    /// Test scenario to run (smoke, carriers, loads, negotiation)
    #[arg(long, default_value = "smoke")]
    scenario: String,

    /// Test timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// Seconds to wait for the server to come up
    #[arg(long, default_value = "10")]
    ready_timeout_secs: u64,

    /// Enable verbose tracing output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    shared::logging::init_tracing("tester", Some(log_level));

    tracing::info!("🧪 Smoke testing {} (scenario: {})", args.server_addr, args.scenario);

    let client = ApiClient::new(&args.server_addr, args.api_key.clone());
    client
        .wait_for_ready(Duration::from_secs(args.ready_timeout_secs))
        .await?;

    let scenarios = TestScenarios::new(client);

    let test_result = timeout(
        Duration::from_secs(args.timeout_secs),
        scenarios.run_scenario(&args.scenario),
    )
    .await;

    match test_result {
        Ok(Ok(())) => {
            tracing::info!("🏁 Scenario '{}' completed successfully", args.scenario);
            Ok(())
        }
        Ok(Err(e)) => {
            tracing::error!("❌ Scenario '{}' failed: {e:#}", args.scenario);
            Err(e)
        }
        Err(_) => {
            tracing::error!("⏰ Scenario '{}' timed out after {}s", args.scenario, args.timeout_secs);
            anyhow::bail!("test timeout")
        }
    }
}
