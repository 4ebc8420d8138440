//! Layered configuration loader.

use std::env;
use std::fs;
use std::path::Path;

use crate::{ConfigError, LogFormat, ToolgateConfig};

/// Configuration loader with layered approach.
///
/// Later layers override earlier ones:
/// 1. Default values (built into the code)
/// 2. Configuration file (TOML or JSON)
/// 3. Environment variables
///
/// # Example
///
/// ```no_run
/// use toolgate_config::ConfigLoader;
///
/// # fn main() -> Result<(), toolgate_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_defaults()
///     .with_optional_file("toolgate.toml")?
///     .with_env_prefix("TOOLGATE")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    config: ToolgateConfig,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader starting from defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ToolgateConfig::default(),
            env_prefix: None,
        }
    }

    /// Reset to default configuration values.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.config = ToolgateConfig::default();
        self
    }

    /// Start with the development preset.
    ///
    /// # Example
    ///
    /// ```
    /// use toolgate_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().with_development().load().unwrap();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn with_development(mut self) -> Self {
        self.config = ToolgateConfig::development();
        self
    }

    /// Start with the production preset.
    #[must_use]
    pub fn with_production(mut self) -> Self {
        self.config = ToolgateConfig::production();
        self
    }

    /// Load configuration from a file.
    ///
    /// The format is chosen by extension: `.toml` or `.json`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - The file does not exist
    /// - The file cannot be read
    /// - The file contains invalid TOML/JSON
    /// - The file contains unknown fields
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

        self.config = Self::parse_file(&content, path)?;
        Ok(self)
    }

    /// Load configuration from a file if it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from a string in the named format ("toml" or "json").
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the format is unknown or parsing fails.
    ///
    /// # Example
    ///
    /// ```
    /// use toolgate_config::ConfigLoader;
    ///
    /// let toml = r#"
    ///     [pagination]
    ///     default_per_page = 100
    /// "#;
    ///
    /// let config = ConfigLoader::new()
    ///     .with_string(toml, "toml")
    ///     .unwrap()
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(config.pagination.default_per_page, 100);
    /// ```
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = match format.to_lowercase().as_str() {
            "toml" => toml::from_str(content)?,
            "json" => serde_json::from_str(content)?,
            _ => return Err(ConfigError::unsupported_format(format)),
        };
        Ok(self)
    }

    /// Set the environment variable prefix for overrides.
    ///
    /// Variables use the format `PREFIX__SECTION__KEY`, for example
    /// `TOOLGATE__PAGINATION__DEFAULT_PER_PAGE=50`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Load variables from a `.env` file into the process environment.
    ///
    /// A missing file is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn with_dotenv(self) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if e.not_found() => Ok(self),
            Err(e) => Err(ConfigError::env_parse_error(".env", e.to_string())),
        }
    }

    /// Apply environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override cannot be parsed or validation
    /// fails.
    pub fn load(mut self) -> Result<ToolgateConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            self.apply_env_overrides(&prefix)?;
        }

        self.config.validate()?;
        Ok(self.config)
    }

    /// Return the configuration without env overrides or validation.
    #[must_use]
    pub fn load_unvalidated(self) -> ToolgateConfig {
        self.config
    }

    fn parse_file(content: &str, path: &Path) -> Result<ToolgateConfig, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(toml::from_str(content)?),
            Some("json") => Ok(serde_json::from_str(content)?),
            _ => Err(ConfigError::unsupported_format(path.display().to_string())),
        }
    }

    fn apply_env_overrides(&mut self, prefix: &str) -> Result<(), ConfigError> {
        let marker = format!("{prefix}__");
        let vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with(&marker))
            .collect();

        for (key, value) in vars {
            self.apply_env_var(&key, &value, prefix)?;
        }

        Ok(())
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let rest = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::env_parse_error(key, "invalid key format"))?;

        let parts: Vec<&str> = rest.split("__").collect();

        match parts.as_slice() {
            ["SERVICE_NAME"] => {
                self.config.service_name = value.to_string();
            }

            ["PAGINATION", "DEFAULT_PAGE"] => {
                self.config.pagination.default_page = parse_int(key, value)?;
            }
            ["PAGINATION", "DEFAULT_PER_PAGE"] => {
                self.config.pagination.default_per_page = parse_int(key, value)?;
            }

            ["LOGGING", "ENABLED"] => {
                self.config.logging.enabled = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            ["LOGGING", "LEVEL"] => {
                self.config.logging.level = value.to_string();
            }
            ["LOGGING", "FORMAT"] => {
                self.config.logging.format = match value.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    "pretty" => LogFormat::Pretty,
                    _ => {
                        return Err(ConfigError::env_parse_error(
                            key,
                            "expected 'json' or 'pretty'",
                        ))
                    }
                };
            }
            ["LOGGING", "INCLUDE_LOCATION"] => {
                self.config.logging.include_location = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }

            ["METRICS", "ENABLED"] => {
                self.config.metrics.enabled = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }

            _ => {
                return Err(ConfigError::env_parse_error(key, "unknown configuration key"));
            }
        }

        Ok(())
    }
}

fn parse_int(key: &str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::env_parse_error(key, "expected integer"))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
