//! Configuration system for courtside.
//!
//! This module provides hierarchical configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of prices, timeouts and refund tables
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`COURTSIDE_*`)
//! 3. User config (`~/.courtside/config.yaml`, or `$COURTSIDE_DATA_DIR/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific data directory:
//!
//! ```no_run
//! use courtside::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/var/lib/courtside")
//!     .build()
//!     .unwrap();
//! println!("output format: {:?}", config.output_format);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use courtside::config::{Config, ConfigBuilder};
//! use courtside::RefundTier;
//!
//! let custom = Config {
//!     refund_policy: Some(vec![RefundTier::new(48, 100), RefundTier::new(4, 50)]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.refund_policy.unwrap().len(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat};
pub use validator::ConfigValidator;
