use std::time::Duration;

use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};

use crate::{
    models::Task,
    store::TaskStore,
    Error, Result,
};

/// Connection settings for the task database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub connect_retries: u32,
    pub retry_delay: Duration,
}

impl DbConfig {
    fn connection_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

#[derive(Clone)]
pub struct Database {
    pool: Pool<MySql>,
}

impl Database {
    /// Open a bounded connection pool, retrying the initial connection a
    /// fixed number of times before giving up.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let url = config.connection_url();
        let mut last_err = None;

        for attempt in 1..=config.connect_retries {
            match MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(&url)
                .await
            {
                Ok(pool) => {
                    tracing::info!("Database connection successful on attempt {}", attempt);
                    return Ok(Self { pool });
                }
                Err(e) => {
                    tracing::error!(
                        "Database connection error (attempt {}/{}): {}",
                        attempt,
                        config.connect_retries,
                        e
                    );
                    last_err = Some(e);
                    if attempt < config.connect_retries {
                        tokio::time::sleep(config.retry_delay).await;
                    }
                }
            }
        }

        Err(Error::Connection(format!(
            "failed to connect after {} attempts: {}",
            config.connect_retries,
            last_err
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no attempts made".to_string())
        )))
    }

    /// Initialize database schema.
    ///
    /// TIMESTAMP(6) so that list ordering stays meaningful for inserts that
    /// land within the same second; the index is declared inline because
    /// MySQL has no CREATE INDEX IF NOT EXISTS.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id BIGINT AUTO_INCREMENT PRIMARY KEY,
                title VARCHAR(100) NOT NULL,
                description TEXT,
                completed BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMP(6) NOT NULL DEFAULT CURRENT_TIMESTAMP(6),
                INDEX idx_tasks_created_at (created_at)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Table 'tasks' created or already present");
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

#[async_trait::async_trait]
impl TaskStore for Database {
    async fn create_task(&self, title: &str, description: Option<&str>) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description)
            VALUES (?, ?)
            "#,
        )
        .bind(title)
        .bind(description)
        .execute(&self.pool)
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| Error::Other(anyhow::anyhow!("generated task id out of i64 range")))?;
        Ok(id)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, completed, created_at \
             FROM tasks ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    // MySQL reports only changed rows for UPDATE, so a no-op update affects
    // zero rows even when the id exists; fall back to an existence check
    // before reporting not-found.
    async fn update_task(&self, id: i64, title: &str, description: Option<&str>) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }

    async fn delete_task(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_completed(&self, id: i64, completed: bool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET completed = ?
            WHERE id = ?
            "#,
        )
        .bind(completed)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }
}
