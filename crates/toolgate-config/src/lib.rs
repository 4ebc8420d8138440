//! Typed configuration for Toolgate tool servers.
//!
//! - TOML and JSON configuration files
//! - Environment variable overrides (`TOOLGATE__SECTION__KEY`)
//! - Strict parsing (unknown fields are rejected)
//! - Layered loading (defaults, then file, then env)
//!
//! # Example
//!
//! ```no_run
//! use toolgate_config::ConfigLoader;
//!
//! # fn main() -> Result<(), toolgate_config::ConfigError> {
//! let config = ConfigLoader::new()
//!     .with_optional_file("toolgate.toml")?
//!     .with_env_prefix("TOOLGATE")
//!     .load()?;
//!
//! let defaults = config.pagination.defaults();
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! ```toml
//! service_name = "issues-server"
//!
//! [pagination]
//! default_page = 1
//! default_per_page = 30
//!
//! [logging]
//! enabled = true
//! level = "info"
//! format = "json"
//!
//! [metrics]
//! enabled = true
//! ```

#![doc(html_root_url = "https://docs.rs/toolgate-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::ToolgateConfig;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{LogFormat, LoggingConfig, MetricsSection, PaginationConfig};
