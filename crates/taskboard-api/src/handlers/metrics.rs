use axum::extract::State;

use crate::state::AppState;

/// Prometheus text exposition for the process-wide recorder.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
