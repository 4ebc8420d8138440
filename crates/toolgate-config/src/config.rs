//! Top-level configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, LogFormat, LoggingConfig, MetricsSection, PaginationConfig};

/// Complete Toolgate server configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use toolgate_config::ToolgateConfig;
///
/// let config = ToolgateConfig::default();
/// assert_eq!(config.pagination.default_per_page, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolgateConfig {
    /// Service name attached to logs.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Pagination defaults.
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Metrics configuration.
    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for ToolgateConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
            metrics: MetricsSection::default(),
        }
    }
}

fn default_service_name() -> String {
    "toolgate".to_string()
}

impl ToolgateConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if:
    /// - A pagination default is not positive
    /// - The log level is not a valid filter directive
    /// - Metrics are enabled with no histogram buckets
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.default_page < 1 {
            return Err(ConfigError::invalid_value(
                "pagination.default_page",
                format!("must be at least 1, got {}", self.pagination.default_page),
            ));
        }

        if self.pagination.default_per_page < 1 {
            return Err(ConfigError::invalid_value(
                "pagination.default_per_page",
                format!(
                    "must be at least 1, got {}",
                    self.pagination.default_per_page
                ),
            ));
        }

        if self.logging.enabled {
            toolgate_telemetry::create_env_filter(&self.logging.level)
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }

        if self.metrics.enabled && self.metrics.duration_buckets.is_empty() {
            return Err(ConfigError::invalid_value(
                "metrics.duration_buckets",
                "must not be empty when metrics are enabled",
            ));
        }

        Ok(())
    }

    /// Development preset: pretty debug logs, so parameter rejections show up.
    ///
    /// # Example
    ///
    /// ```
    /// use toolgate_config::{LogFormat, ToolgateConfig};
    ///
    /// let config = ToolgateConfig::development();
    /// assert_eq!(config.logging.format, LogFormat::Pretty);
    /// ```
    #[must_use]
    pub fn development() -> Self {
        Self {
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Pretty,
                include_location: true,
                ..LoggingConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production preset: JSON logs at `info`.
    #[must_use]
    pub fn production() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ToolgateConfig::default().validate().is_ok());
        assert!(ToolgateConfig::development().validate().is_ok());
        assert!(ToolgateConfig::production().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_default_page() {
        let mut config = ToolgateConfig::default();
        config.pagination.default_page = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pagination.default_page"));
    }

    #[test]
    fn test_rejects_negative_default_per_page() {
        let mut config = ToolgateConfig::default();
        config.pagination.default_per_page = -5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pagination.default_per_page"));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = ToolgateConfig::default();
        config.logging.level = "toolgate=verbose".to_string();
        assert!(config.validate().is_err());

        config.logging.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_buckets() {
        let mut config = ToolgateConfig::default();
        config.metrics.duration_buckets.clear();
        assert!(config.validate().is_err());

        config.metrics.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_top_level_field() {
        let result: Result<ToolgateConfig, _> = serde_json::from_str(r#"{"server": {}}"#);
        assert!(result.is_err());
    }
}
