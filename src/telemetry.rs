//! Prometheus metrics: recorder setup, `/metrics` rendering and per-endpoint
//! request timing

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response},
    middleware::Next,
};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::models::RoomType;

pub const HTTP_REQUESTS_TOTAL: &str = "roomdesk_http_requests_total";
pub const HTTP_REQUEST_DURATION: &str = "roomdesk_http_request_duration_seconds";
pub const HTTP_REQUEST_ERRORS: &str = "roomdesk_http_requests_errors_total";
pub const PRICE_QUOTES_TOTAL: &str = "roomdesk_price_quotes_total";

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder. Later calls return the same handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        register_metric_descriptions();
        tracing::info!("Prometheus metrics recorder initialized");
        Ok(handle)
    })
}

/// `GET /metrics`
pub async fn metrics_handler() -> String {
    match METRICS_HANDLE.get() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total number of REST requests per endpoint");
    describe_histogram!(HTTP_REQUEST_DURATION, "REST request duration in seconds per endpoint");
    describe_counter!(HTTP_REQUEST_ERRORS, "REST requests answered with a 4xx or 5xx status");
    describe_counter!(PRICE_QUOTES_TOTAL, "Price quotes computed, by room type");
}

/// Times every routed request. The `path` label is the route template
/// (`/api/rooms/:id`), never the raw URI.
pub async fn track_metrics(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    let status = response.status();
    let status_label = status.as_u16().to_string();

    counter!(
        HTTP_REQUESTS_TOTAL,
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status_label.clone()
    )
    .increment(1);

    histogram!(
        HTTP_REQUEST_DURATION,
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if status.is_client_error() || status.is_server_error() {
        counter!(
            HTTP_REQUEST_ERRORS,
            "method" => method,
            "path" => path,
            "status" => status_label
        )
        .increment(1);
    }

    response
}

pub fn record_price_quote(room_type: RoomType) {
    counter!(PRICE_QUOTES_TOTAL, "room_type" => room_type.as_str()).increment(1);
}
