//! Observability for Toolgate tool servers.
//!
//! - **Logging**: structured JSON or pretty output via `tracing-subscriber`
//! - **Metrics**: Prometheus-format counters and histograms via `metrics`
//! - **Instrumentation**: [`Instrumented`] wraps any handler with both
//!
//! # Standard Metrics
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `toolgate_tool_calls_total` | Counter | `tool`, `status` | Completed tool calls |
//! | `toolgate_tool_call_duration_seconds` | Histogram | `tool` | Tool call latency |
//! | `toolgate_param_errors_total` | Counter | `tool`, `kind` | Rejected parameters |
//! | `toolgate_in_flight_calls` | Gauge | - | Calls currently running |
//!
//! # Example
//!
//! ```rust,ignore
//! use toolgate_telemetry::{init_telemetry, LogConfig, MetricsConfig};
//!
//! init_telemetry(&LogConfig::production(), &MetricsConfig::default())?;
//! ```

#![doc(html_root_url = "https://docs.rs/toolgate-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
mod instrument;
pub mod logging;
pub mod metrics;

pub use error::TelemetryError;
pub use instrument::{call_status, Instrumented};
pub use logging::{create_env_filter, init_logging, LogConfig};
pub use self::metrics::{init_metrics, render_metrics, MetricsConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Initializes logging, then metrics.
///
/// # Errors
///
/// Returns `TelemetryError` if either subsystem fails to initialize.
pub fn init_telemetry(logging: &LogConfig, metrics: &MetricsConfig) -> TelemetryResult<()> {
    init_logging(logging)?;
    init_metrics(metrics)?;
    Ok(())
}
