use axum::{
    middleware::from_fn,
    routing::{get, patch, put},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};

use crate::{error, handlers, middleware::track_requests, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Task endpoints
        .route(
            "/api/tasks",
            get(handlers::task::list_tasks).post(handlers::task::create_task),
        )
        .route(
            "/api/tasks/:task_id",
            put(handlers::task::update_task).delete(handlers::task::delete_task),
        )
        .route("/api/tasks/:task_id/toggle", patch(handlers::task::toggle_task))

        // Prometheus exposition
        .route("/metrics", get(handlers::metrics::render_metrics))

        // Add state
        .with_state(state)

        // Panics become an opaque 500
        .layer(CatchPanicLayer::custom(error::handle_panic))

        // Request logging and metrics; layered after the panic handler so
        // the fabricated 500 is logged and counted like any other response
        .layer(from_fn(track_requests))

        // Add CORS
        .layer(CorsLayer::permissive())
}
