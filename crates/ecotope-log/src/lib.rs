//! Structured logging for the ecotope tools.
//!
//! Installs a `tracing` subscriber with console output and, in debug builds,
//! a JSON log file. The level comes from `RUST_LOG` when set, otherwise from
//! the configuration.

use ecotope_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config supplies one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log written in debug builds.
pub const LOG_FILE: &str = "ecotope.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - Directory for the JSON log file (debug builds only)
/// * `debug_build` - Enables the file layer
/// * `config` - Supplies `debug.log_level` when `RUST_LOG` is unset
///
/// # Examples
///
/// ```no_run
/// use ecotope_config::Config;
/// use ecotope_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    // RUST_LOG wins over the config level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    // Console layer: human-readable, one line per event
    let console_layer = fmt::layer()
        .with_target(true) // Show module path
        .with_thread_names(true) // Distinguishes concurrent queries
        .with_level(true) // Show log level
        .with_timer(fmt::time::uptime()); // Time since start

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    // Debug builds also write a JSON log into log_dir
    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false) // No ANSI color codes in file output
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json(); // Structured JSON for machine parsing

        subscriber.with(file_layer).init();
        tracing::debug!(log_dir = %log_dir.display(), "logging initialized with file output");
        return;
    }

    subscriber.init();
    tracing::debug!("logging initialized");
}

/// Filter directive taken from the config, or [`DEFAULT_FILTER`] when it is
/// missing or blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}
