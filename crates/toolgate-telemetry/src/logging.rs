//! Structured logging for tool servers.
//!
//! Installs a `tracing-subscriber` registry with either JSON output (the
//! default, for machine ingestion) or a human-readable pretty format.
//!
//! # Example
//!
//! ```rust,ignore
//! use toolgate_telemetry::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//!
//! tracing::info!(tool = "get_me", "Serving tool");
//! ```

use crate::error::TelemetryError;
use crate::TelemetryResult;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether logging is enabled.
    pub enabled: bool,

    /// Filter directive (e.g., "info", "toolgate_extract=debug,warn").
    pub level: String,

    /// Whether to output JSON format.
    pub json_format: bool,

    /// Whether to include span events (new, close).
    pub span_events: bool,

    /// Whether to include file/line info.
    pub file_line_info: bool,

    /// Whether to include thread IDs.
    pub thread_ids: bool,

    /// Whether to include target (module path).
    pub include_target: bool,

    /// Service name for log fields.
    pub service_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            json_format: true,
            span_events: false,
            file_line_info: false,
            thread_ids: false,
            include_target: true,
            service_name: "toolgate".to_string(),
        }
    }
}

impl LogConfig {
    /// Creates a development configuration with human-readable output.
    ///
    /// Parameter rejections are logged at `debug`, so they are visible here.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            span_events: true,
            file_line_info: true,
            ..Self::default()
        }
    }

    /// Creates a production configuration with JSON output.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }

    /// Creates a configuration that installs nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Initializes the logging subsystem.
///
/// Does nothing when `config.enabled` is false.
///
/// # Errors
///
/// Returns `TelemetryError::LoggingInit` if the filter directive is invalid
/// or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> TelemetryResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = create_env_filter(&config.level)?;

    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    if config.json_format {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_span_events(span_events)
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_thread_ids(config.thread_ids)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_span_events(span_events)
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_thread_ids(config.thread_ids)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    tracing::debug!(service = %config.service_name, "logging initialized");
    Ok(())
}

/// Creates an env filter from a directive string.
///
/// # Errors
///
/// Returns error if the filter string is invalid.
pub fn create_env_filter(filter: &str) -> TelemetryResult<EnvFilter> {
    EnvFilter::try_new(filter)
        .map_err(|e| TelemetryError::LoggingInit(format!("Invalid log level: {e}")))
}
