//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in the TOML configuration file.

/// One polled Transmission daemon.
pub mod backend_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Sentry error reporting configuration.
pub mod sentry_config;

/// Metrics listener configuration (address, path, timeouts, SSL).
pub mod web_config;
