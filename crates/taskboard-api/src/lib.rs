pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
