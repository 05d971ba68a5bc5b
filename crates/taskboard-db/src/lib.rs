pub mod error;
pub mod models;
pub mod repository;
pub mod store;

// Re-exports
pub use error::{Error, Result};
pub use models::Task;
pub use repository::{Database, DbConfig};
pub use store::TaskStore;
