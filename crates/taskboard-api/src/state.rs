use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use taskboard_db::TaskStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TaskStore>,
    pub metrics: PrometheusHandle,
}
