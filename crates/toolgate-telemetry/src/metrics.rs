//! Prometheus metrics for tool calls.
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `toolgate_tool_calls_total` | Counter | `tool`, `status` | Completed tool calls |
//! | `toolgate_tool_call_duration_seconds` | Histogram | `tool` | Tool call latency |
//! | `toolgate_param_errors_total` | Counter | `tool`, `kind` | Rejected parameters |
//! | `toolgate_in_flight_calls` | Gauge | - | Calls currently running |
//!
//! Recording functions are no-ops until a recorder is installed, so handlers
//! can call them unconditionally.

use crate::error::TelemetryError;
use crate::TelemetryResult;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Duration;

/// Counter of completed tool calls.
pub const TOOL_CALLS_TOTAL: &str = "toolgate_tool_calls_total";

/// Histogram of tool call durations.
pub const TOOL_CALL_DURATION_SECONDS: &str = "toolgate_tool_call_duration_seconds";

/// Counter of rejected parameters.
pub const PARAM_ERRORS_TOTAL: &str = "toolgate_param_errors_total";

/// Gauge of running calls.
pub const IN_FLIGHT_CALLS: &str = "toolgate_in_flight_calls";

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Metrics configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    /// Whether metrics are enabled.
    pub enabled: bool,

    /// Histogram buckets for call duration, in seconds.
    pub duration_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // 1ms .. 10s
            duration_buckets: vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        }
    }
}

/// Installs the global Prometheus recorder.
///
/// Calling this again after a successful install is a no-op.
///
/// # Errors
///
/// Returns `TelemetryError::MetricsInit` if the buckets are invalid or another
/// recorder is already installed.
pub fn init_metrics(config: &MetricsConfig) -> TelemetryResult<()> {
    if !config.enabled || METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(TOOL_CALL_DURATION_SECONDS.to_string()),
            &config.duration_buckets,
        )
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?
        .install_recorder()
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

    let _ = METRICS_HANDLE.set(handle);
    register_metric_descriptions();

    Ok(())
}

/// Renders metrics in Prometheus text format.
///
/// Returns `None` if metrics are not initialized.
#[must_use]
pub fn render_metrics() -> Option<String> {
    METRICS_HANDLE.get().map(PrometheusHandle::render)
}

fn register_metric_descriptions() {
    describe_counter!(TOOL_CALLS_TOTAL, "Total number of tool calls by outcome");
    describe_histogram!(
        TOOL_CALL_DURATION_SECONDS,
        metrics::Unit::Seconds,
        "Tool call duration in seconds"
    );
    describe_counter!(
        PARAM_ERRORS_TOTAL,
        "Total number of rejected tool parameters by kind"
    );
    describe_gauge!(IN_FLIGHT_CALLS, "Number of tool calls currently running");
}

/// Records a completed tool call.
///
/// `status` is `ok`, `tool_error`, or an error category label.
pub fn record_tool_call(tool: &str, status: &str, duration: Duration) {
    counter!(
        TOOL_CALLS_TOTAL,
        "tool" => tool.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(TOOL_CALL_DURATION_SECONDS, "tool" => tool.to_string())
        .record(duration.as_secs_f64());
}

/// Records a rejected parameter.
pub fn record_param_error(tool: &str, kind: &str) {
    counter!(
        PARAM_ERRORS_TOTAL,
        "tool" => tool.to_string(),
        "kind" => kind.to_string()
    )
    .increment(1);
}

/// Guard that tracks one running call in the in-flight gauge.
pub struct InFlightGuard {
    _private: (),
}

impl InFlightGuard {
    /// Creates a new guard and increments the in-flight gauge.
    #[must_use]
    pub fn new() -> Self {
        gauge!(IN_FLIGHT_CALLS).increment(1.0);
        Self { _private: () }
    }
}

impl Default for InFlightGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        gauge!(IN_FLIGHT_CALLS).decrement(1.0);
    }
}
