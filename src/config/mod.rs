//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the exporter
//! configuration from TOML files, with command line and environment overrides.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**, **namespace**, **always_label_backend**, **rpc_request_timeout**
//! - **web**: the metrics listener (address, path, timeouts, SSL)
//! - **backends**: one entry per Transmission daemon to poll
//! - **sentry_config**: error reporting configuration
//!
//! # Sources
//!
//! 1. The TOML file, when it exists.
//! 2. Otherwise the defaults, with a single backend taken from
//!    `TRANSMISSION_ADDR`, `TRANSMISSION_USERNAME`, `TRANSMISSION_PASSWORD`
//!    and `CLIENT_NAME`.
//! 3. `WEB_ADDR` / `WEB_PATH` override the listener in both cases.
//!
//! # Example
//!
//! ```rust,ignore
//! use transmission_exporter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
