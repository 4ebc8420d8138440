//! Configuration schema types.

use serde::{Deserialize, Serialize};
use toolgate_extract::{PaginationDefaults, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use toolgate_telemetry::{LogConfig, MetricsConfig};

/// Pagination defaults applied by paginated tools.
///
/// # Example
///
/// ```
/// use toolgate_config::PaginationConfig;
///
/// let config = PaginationConfig::default();
/// assert_eq!(config.default_page, 1);
/// assert_eq!(config.default_per_page, 30);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PaginationConfig {
    /// Page number used when a call omits `page` or passes `0`.
    #[serde(default = "default_page")]
    pub default_page: i64,

    /// Page size used when a call omits `perPage` or passes `0`.
    #[serde(default = "default_per_page")]
    pub default_per_page: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_per_page: default_per_page(),
        }
    }
}

impl PaginationConfig {
    /// Converts to the defaults record consumed by the pagination accessor.
    #[must_use]
    pub const fn defaults(&self) -> PaginationDefaults {
        PaginationDefaults {
            page: self.default_page,
            per_page: self.default_per_page,
        }
    }
}

const fn default_page() -> i64 {
    DEFAULT_PAGE
}

const fn default_per_page() -> i64 {
    DEFAULT_PER_PAGE
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON formatted logs (production).
    #[default]
    Json,
    /// Human-readable pretty format (development).
    Pretty,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Converts to the telemetry crate's logging settings.
    #[must_use]
    pub fn to_log_config(&self, service_name: &str) -> LogConfig {
        LogConfig {
            enabled: self.enabled,
            level: self.level.clone(),
            json_format: self.format == LogFormat::Json,
            span_events: self.format == LogFormat::Pretty,
            file_line_info: self.include_location,
            service_name: service_name.to_string(),
            ..LogConfig::default()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Enable the Prometheus recorder.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Duration histogram buckets in seconds.
    #[serde(default = "default_buckets")]
    pub duration_buckets: Vec<f64>,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_buckets: default_buckets(),
        }
    }
}

impl MetricsSection {
    /// Converts to the telemetry crate's metrics settings.
    #[must_use]
    pub fn to_metrics_config(&self) -> MetricsConfig {
        MetricsConfig {
            enabled: self.enabled,
            duration_buckets: self.duration_buckets.clone(),
        }
    }
}

fn default_buckets() -> Vec<f64> {
    MetricsConfig::default().duration_buckets
}

const fn default_true() -> bool {
    true
}
