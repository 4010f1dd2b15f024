//! Metrics collection and exposition.
//!
//! # Metrics
//! - `catalog_fetch_total` (counter): fetches by outcome (ok, network, timeout, status, parse, request)
//! - `catalog_fetch_duration_seconds` (histogram): fetch latency
//! - `catalog_stale_responses_total` (counter): responses dropped because a newer fetch started

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Start the Prometheus scrape endpoint. Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_fetch(outcome: &'static str, started: Instant) {
    ::metrics::counter!("catalog_fetch_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("catalog_fetch_duration_seconds").record(started.elapsed().as_secs_f64());
}

pub fn record_stale_response() {
    ::metrics::counter!("catalog_stale_responses_total").increment(1);
}
