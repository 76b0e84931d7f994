use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "mentor-engine.log";

/// Keeps the non-blocking file writer alive; dropping it flushes and stops
/// file logging.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

fn file_logging_enabled() -> bool {
    std::env::var("MENTOR_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// Initializes the global tracing subscriber: env-filtered stdout, plus a
/// daily-rolling file appender when `MENTOR_FILE_LOGS` is set.
pub fn init_tracing(log_level: &str) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    if !file_logging_enabled() {
        registry.init();
        return None;
    }

    let log_dir = std::env::var("MENTOR_LOG_DIR").unwrap_or_else(|_| "./logs".to_string());
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("failed to create log directory {log_dir}: {err}");
        registry.init();
        return None;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    registry.with(file_layer).init();
    Some(FileLogGuard { _guard: guard })
}
