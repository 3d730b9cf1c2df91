// logging.rs - tracing subscriber setup: stderr plus optional log file

use std::fs::{create_dir_all, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Timestamp format of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "pazyscrape=debug"
    } else {
        "pazyscrape=info"
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` overrides the default level. When `log_path` is given, the same
/// events are appended to that file without ANSI colours.
pub fn init_logging(log_path: Option<&Path>, verbose: bool) -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false);

    let file_layer = match log_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                create_dir_all(parent).map_err(|e| {
                    format!("Failed to create log directory '{}': {}", parent.display(), e)
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file '{}': {}", path.display(), e))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                    .with_target(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "pazyscrape=info");
        assert_eq!(default_directive(true), "pazyscrape=debug");
    }

    #[test]
    fn test_timestamp_format() {
        let formatted = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 1))
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string());
        assert_eq!(formatted.as_deref(), Some("2024-03-09 07:05:01"));
    }
}
