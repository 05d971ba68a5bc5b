use crate::{models::Task, Result};
use async_trait::async_trait;

/// Storage seam for task records. The HTTP layer only sees this trait, so
/// tests can drive the router against an in-memory implementation.
///
/// Mutating operations report whether a row with the given id existed;
/// `false` maps to a 404 in the route layer.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(&self, title: &str, description: Option<&str>) -> Result<i64>;

    async fn list_tasks(&self) -> Result<Vec<Task>>;

    async fn update_task(&self, id: i64, title: &str, description: Option<&str>) -> Result<bool>;

    async fn delete_task(&self, id: i64) -> Result<bool>;

    async fn set_completed(&self, id: i64, completed: bool) -> Result<bool>;
}
