//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! whole process.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with stdout output
pub fn init_logger(log_level: &str) {
    init_logger_with_file(log_level, None);
}

/// Initialize the logger, writing to a daily rolling file when `log_dir` exists
pub fn init_logger_with_file(log_level: &str, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "demandflow-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("LOG_DIR {dir} does not exist, logging to stdout");
    }

    subscriber.init();
}
