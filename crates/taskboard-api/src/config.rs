use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use taskboard_db::DbConfig;

/// Process configuration, read once at startup and passed to the components
/// that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_port: u16,
    pub db: DbConfig,
    pub secret_key: String,
    pub debug: bool,
    pub log_level: String,
    pub log_file: String,
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    or_default(key, default)
        .parse()
        .with_context(|| format!("{key} must be a valid number"))
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let db = DbConfig {
            host: or_default("DB_HOST", "localhost"),
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            database: required("DB_NAME")?,
            port: parsed("DB_PORT", "3306")?,
            max_connections: parsed("DB_MAX_CONNECTIONS", "5")?,
            acquire_timeout: Duration::from_secs(parsed("DB_ACQUIRE_TIMEOUT_SECS", "30")?),
            connect_retries: parsed("DB_CONNECT_RETRIES", "5")?,
            retry_delay: Duration::from_secs(parsed("DB_RETRY_DELAY_SECS", "5")?),
        };

        Ok(Self {
            api_port: parsed("API_PORT", "5000")?,
            db,
            secret_key: or_default("SECRET_KEY", "development_secret"),
            debug: or_default("DEBUG", "false").eq_ignore_ascii_case("true"),
            log_level: or_default("LOG_LEVEL", "info"),
            log_file: or_default("LOG_FILE", "app.log"),
        })
    }
}
