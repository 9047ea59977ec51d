//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cities_http_requests_total` (counter): requests by method, route, status
//! - `cities_http_request_duration_seconds` (histogram): latency by method, route
//! - `cities_validation_failures_total` (counter): rejected requests by failing part
//!
//! Recording is a no-op until a recorder is installed, so handlers and tests
//! can call these unconditionally.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::validation::RequestPart;

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(method: &str, route: &str, status: u16, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];
    metrics::counter!("cities_http_requests_total", &labels).increment(1);

    let labels = [("method", method.to_string()), ("route", route.to_string())];
    metrics::histogram!("cities_http_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}

/// Record a request rejected because `part` failed validation.
pub fn record_validation_failure(part: RequestPart) {
    metrics::counter!("cities_validation_failures_total", "part" => part.as_str()).increment(1);
}

/// Middleware recording count and latency for every request.
///
/// Uses the matched route template (`/cities/{id}`) rather than the raw path
/// to keep label cardinality bounded.
pub async fn track_metrics(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;
    record_request(&method, &route, response.status().as_u16(), start_time);
    response
}
