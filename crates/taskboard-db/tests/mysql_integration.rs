//! Live-MySQL smoke tests. Run with:
//!   cargo test -p taskboard-db --features database-tests
//! against a scratch database described by TEST_DB_* variables.
#![cfg(feature = "database-tests")]

use std::time::Duration;

use taskboard_db::{Database, DbConfig, TaskStore};

fn test_config() -> DbConfig {
    let env = |key: &str, default: &str| {
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    };

    DbConfig {
        host: env("TEST_DB_HOST", "localhost"),
        user: env("TEST_DB_USER", "test"),
        password: env("TEST_DB_PASSWORD", "test"),
        database: env("TEST_DB_NAME", "taskboard_test"),
        port: env("TEST_DB_PORT", "3306").parse().unwrap(),
        max_connections: 2,
        acquire_timeout: Duration::from_secs(5),
        connect_retries: 1,
        retry_delay: Duration::from_secs(1),
    }
}

async fn setup() -> Database {
    let db = Database::connect(&test_config()).await.unwrap();
    db.ensure_schema().await.unwrap();
    db
}

#[tokio::test]
async fn create_and_list_roundtrip() {
    let db = setup().await;

    let id = db.create_task("Buy milk", Some("2%")).await.unwrap();
    assert!(id > 0);

    let tasks = db.list_tasks().await.unwrap();
    let task = tasks.iter().find(|t| t.id == id).unwrap();
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.description.as_deref(), Some("2%"));
    assert!(!task.completed);

    assert!(db.delete_task(id).await.unwrap());
}

#[tokio::test]
async fn mutations_report_row_existence() {
    let db = setup().await;

    let id = db.create_task("Temp", None).await.unwrap();

    assert!(db.update_task(id, "Renamed", Some("desc")).await.unwrap());
    // No-op update still finds the row.
    assert!(db.update_task(id, "Renamed", Some("desc")).await.unwrap());
    assert!(db.set_completed(id, true).await.unwrap());
    assert!(db.set_completed(id, true).await.unwrap());
    assert!(db.delete_task(id).await.unwrap());

    // Gone now.
    assert!(!db.update_task(id, "x", None).await.unwrap());
    assert!(!db.set_completed(id, false).await.unwrap());
    assert!(!db.delete_task(id).await.unwrap());
}

#[tokio::test]
async fn list_orders_newest_first() {
    let db = setup().await;

    let a = db.create_task("A", None).await.unwrap();
    let b = db.create_task("B", None).await.unwrap();
    let c = db.create_task("C", None).await.unwrap();

    let tasks = db.list_tasks().await.unwrap();
    let positions: Vec<usize> = [c, b, a]
        .iter()
        .map(|id| tasks.iter().position(|t| t.id == *id).unwrap())
        .collect();
    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);

    for id in [a, b, c] {
        db.delete_task(id).await.unwrap();
    }
}
