//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON file logging with rotation
//! - `RUST_LOG` / configured log levels
//!
//! # Example
//!
//! ```no_run
//! use cf_offers::logging::init_logging;
//! use cf_offers::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(tenant = "acme", "Calling the export action");
//! ```

use crate::config::LoggingConfig;
use crate::domain::{OffersError, Result};
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// File name of the JSON log inside `logging.local_path`
pub const LOG_FILE_NAME: &str = "cf-offers.log";

/// Flushes the JSON log file when dropped; hold it until the process exits
pub struct LoggingGuard(Option<WorkerGuard>);

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set. Console output goes to stderr;
/// `logging.local_enabled` adds a JSON file next to it. Fails if a
/// subscriber is already installed.
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cf_offers={level}")));

    let console = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let (json_file, guard) = if config.local_enabled {
        let (writer, guard) = file_writer(config)?;
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(json_file)
        .try_init()
        .map_err(|e| OffersError::Configuration(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(
        local_enabled = config.local_enabled,
        rotation = %config.local_rotation,
        "Logging initialized"
    );

    Ok(LoggingGuard(guard))
}

fn file_writer(config: &LoggingConfig) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        OffersError::Configuration(format!(
            "Failed to create log directory {}: {e}",
            config.local_path
        ))
    })?;

    let appender = RollingFileAppender::new(
        rotation(&config.local_rotation),
        &config.local_path,
        LOG_FILE_NAME,
    );
    Ok(tracing_appender::non_blocking(appender))
}

/// Config validation has already rejected unknown names
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        OffersError::Configuration(format!(
            "Invalid log level: {level}. Must be one of: trace, debug, info, warn, error"
        ))
    })
}

/// Log the outcome of a remote call made for a batch of fragments
///
/// # Example
///
/// ```no_run
/// use cf_offers::log_remote_call;
///
/// log_remote_call!("publish", 3, std::time::Duration::from_millis(120));
/// ```
#[macro_export]
macro_rules! log_remote_call {
    ($operation:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            operation = $operation,
            fragment_count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Remote call completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use cf_offers::log_error_with_context;
/// use cf_offers::domain::OffersError;
///
/// let error = OffersError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
