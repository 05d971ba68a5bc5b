use anyhow::Result;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

/// Total requests per endpoint, labeled by method, endpoint and status code.
pub const REQUEST_COUNTER: &str = "app_requests_total";

/// Request latency per endpoint, labeled by method and endpoint.
pub const REQUEST_LATENCY: &str = "app_request_latency_seconds";

const LATENCY_SECONDS_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// Install the process-wide Prometheus recorder and hand back the handle the
/// `/metrics` endpoint renders from.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(REQUEST_LATENCY.to_string()),
            LATENCY_SECONDS_BUCKETS,
        )?
        .install_recorder()?;

    Ok(handle)
}
