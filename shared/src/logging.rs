//! Shared logging utilities for consistent tracing across binaries

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the stdout tracing subscriber for a named component.
///
/// `log_level` overrides the default `info` for our own crates. Transport
/// crates are pinned to warn so request noise stays out of demo logs, with
/// tower_http left at the component level for request tracing.
pub fn init_tracing(component: &str, log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");

    let env_filter = format!(
        "{component}={base_level},shared={base_level},tower_http={base_level},axum=warn,hyper=warn,reqwest=warn"
    );

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
