//! Metrics collection and exposition.
//!
//! # Metrics
//! - `duty_requests_total` (counter): stubbed requests by method, status, route kind
//! - `duty_request_duration_seconds` (histogram): latency distribution
//! - `duty_admin_operations_total` (counter): admin calls by operation, status

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Start the Prometheus scrape endpoint. Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a request against a stubbed route (or a miss, with kind "none").
pub fn record_request(method: &str, status: u16, kind: &'static str, start: Instant) {
    let method = method.to_string();
    let status = status.to_string();
    metrics::counter!(
        "duty_requests_total",
        "method" => method.clone(),
        "status" => status.clone(),
        "kind" => kind
    )
    .increment(1);
    metrics::histogram!(
        "duty_request_duration_seconds",
        "method" => method,
        "status" => status,
        "kind" => kind
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record an admin operation.
pub fn record_admin(operation: &'static str, status: u16) {
    metrics::counter!(
        "duty_admin_operations_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
}
