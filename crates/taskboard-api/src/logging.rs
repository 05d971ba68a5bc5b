use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Bounded backup count for rotated log files.
const MAX_LOG_FILES: usize = 5;

fn build_file_appender(log_file: &str) -> Result<RollingFileAppender> {
    let path = Path::new(log_file);
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("app.log");

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .max_log_files(MAX_LOG_FILES)
        .build(dir)
        .with_context(|| format!("failed to open log file {log_file}"))
}

/// Initialize tracing with a console layer and a rolling file layer (daily
/// rotation, at most [`MAX_LOG_FILES`] files kept).
///
/// The returned guard owns the background writer thread for the file sink;
/// the caller must keep it alive for the process lifetime.
pub fn init(log_level: &str, log_file: &str, debug: bool) -> Result<WorkerGuard> {
    let file_appender = build_file_appender(log_file)?;
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let default_directive = if debug { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_appender_accepts_bare_filename() {
        build_file_appender("app.log").unwrap();
    }

    #[test]
    fn file_appender_accepts_nested_path() {
        let dir = std::env::temp_dir().join("taskboard-logging-test");
        std::fs::create_dir_all(&dir).unwrap();
        build_file_appender(dir.join("app.log").to_str().unwrap()).unwrap();
    }
}
