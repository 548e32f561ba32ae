//! Smoke scenarios for the carrier sales API
//!
//! Each scenario drives a running server through its public endpoints and
//! checks the canonical demo responses, including the exact message texts
//! voice agents read back to carriers.

use anyhow::{Context, Result, bail, ensure};
use reqwest::StatusCode;
use tracing::info;

use crate::api_client::ApiClient;
use shared::OfferResult;

/// Named scenario runner over a live server
pub struct TestScenarios {
    client: ApiClient,
}

impl TestScenarios {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run a named scenario
    pub async fn run_scenario(&self, name: &str) -> Result<()> {
        match name {
            "smoke" => self.run_smoke().await,
            "carriers" => self.check_carriers().await,
            "loads" => self.check_loads().await,
            "negotiation" => self.check_negotiation().await,
            other => bail!("Unknown scenario '{other}' (expected smoke, carriers, loads, or negotiation)"),
        }
    }

    /// Everything: carriers, loads, negotiation
    async fn run_smoke(&self) -> Result<()> {
        self.check_carriers().await?;
        self.check_loads().await?;
        self.check_negotiation().await?;
        Ok(())
    }

    async fn check_carriers(&self) -> Result<()> {
        info!("🚚 Checking carrier verification");

        let verified = self.client.verify_carrier("MC123456").await?.success()?;
        ensure!(verified.verified, "MC123456 should verify");
        ensure!(
            verified.carrier_name == "ABC Trucking",
            "unexpected carrier name: {}",
            verified.carrier_name
        );

        let (status, detail) = self.client.verify_carrier("MC000000").await?.failure()?;
        ensure!(status == StatusCode::NOT_FOUND, "unknown carrier should be 404, got {status}");
        ensure!(
            detail == "Carrier not found in our database.",
            "unexpected detail: {detail}"
        );

        let (status, detail) = self.client.verify_carrier("123456").await?.failure()?;
        ensure!(status == StatusCode::BAD_REQUEST, "missing MC prefix should be 400, got {status}");
        ensure!(
            detail == "Invalid MC number format. Must start with 'MC'.",
            "unexpected detail: {detail}"
        );

        info!("✅ Carrier verification checks passed");
        Ok(())
    }

    async fn check_loads(&self) -> Result<()> {
        info!("📦 Checking load lookup");

        for reference in ["REF09460", "ref09460", "09460", "9460"] {
            let load = self
                .client
                .get_load(reference)
                .await?
                .success()
                .with_context(|| format!("lookup of {reference}"))?;

            ensure!(
                load.reference_number == "REF09460",
                "{reference} resolved to {}",
                load.reference_number
            );
            ensure!(load.rate == 868, "unexpected rate for {reference}: {}", load.rate);
        }

        let (status, detail) = self.client.get_load("REF99999").await?.failure()?;
        ensure!(status == StatusCode::NOT_FOUND, "unknown load should be 404, got {status}");
        ensure!(detail == "Load not found", "unexpected detail: {detail}");

        let (status, _) = self.client.get_load("REF000").await?.failure()?;
        ensure!(
            status == StatusCode::BAD_REQUEST,
            "zeros-only reference should be 400, got {status}"
        );

        info!("✅ Load lookup checks passed");
        Ok(())
    }

    async fn check_negotiation(&self) -> Result<()> {
        info!("🤝 Checking offer evaluation");

        let accepted = self.client.evaluate_offer(800, 700, Some(1)).await?.success()?;
        ensure!(accepted.result == OfferResult::Accept, "800 vs 700 should accept");
        ensure!(accepted.new_offer == 800, "accept should keep the carrier's 800");
        ensure!(accepted.message == "Offer accepted.", "unexpected message: {}", accepted.message);

        let countered = self.client.evaluate_offer(600, 700, Some(1)).await?.success()?;
        ensure!(countered.result == OfferResult::Counter, "600 vs 700 should counter");
        ensure!(countered.new_offer == 650, "counter should land at 650, got {}", countered.new_offer);
        ensure!(
            countered.message == "We can go as low as 650 on this load.",
            "unexpected message: {}",
            countered.message
        );

        let final_counter = self.client.evaluate_offer(600, 700, Some(2)).await?.success()?;
        ensure!(
            final_counter.message == "This is our final counter at 650.",
            "unexpected message: {}",
            final_counter.message
        );

        let defaulted = self.client.evaluate_offer(600, 700, None).await?.success()?;
        ensure!(
            defaulted.message == "We can go as low as 650 on this load.",
            "omitted attempt should act as the first"
        );

        info!("✅ Offer evaluation checks passed");
        Ok(())
    }
}
