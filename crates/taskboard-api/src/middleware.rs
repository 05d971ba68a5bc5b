use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, histogram};

use crate::metrics::{REQUEST_COUNTER, REQUEST_LATENCY};

/// Logs every request at start and completion and feeds the request counter
/// and latency histogram. Labels use the raw request path, matching the
/// exposition of the system this replaces.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    tracing::info!("Request started: {} {}", method, path);
    let start = Instant::now();

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16();

    tracing::info!(
        "Request completed: {} {} - Status {} - Latency {:.4}s",
        method,
        path,
        status,
        latency
    );

    counter!(
        REQUEST_COUNTER,
        "method" => method.clone(),
        "endpoint" => path.clone(),
        "http_status" => status.to_string()
    )
    .increment(1);

    histogram!(
        REQUEST_LATENCY,
        "method" => method,
        "endpoint" => path
    )
    .record(latency);

    response
}
