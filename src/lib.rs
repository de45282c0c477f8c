//! # transmission-exporter
//!
//! A Prometheus exporter for one or more Transmission BitTorrent daemons.
//!
//! ## Overview
//!
//! Every scrape of the metrics endpoint queries all configured daemons over
//! their JSON-RPC interface and republishes torrents, tracker statistics,
//! session configuration and session statistics as gauges. Nothing is cached
//! between scrapes and the daemons are never modified.
//!
//! ## Features
//!
//! - **Session handshake**: transparent `X-Transmission-Session-Id`
//!   acquisition and a single refresh-and-retry on HTTP 409
//! - **Multiple backends**: queried concurrently, series labeled by backend
//! - **Partial failure**: a failing backend only drops its own series
//! - **TLS**: optional rustls listener
//! - **Monitoring**: colored logging and optional Sentry reporting
//!
//! ## Modules
//!
//! - [`api`] - actix-web listener serving the metrics and landing page
//! - [`client`] - one client per backend behind the `BackendQuery` trait
//! - [`collector`] - torrent, session and session statistics collectors
//! - [`common`] - logging, label helpers and the clock abstraction
//! - [`config`] - TOML configuration with environment overrides
//! - [`metrics`] - descriptors, registry and text exposition
//! - [`rpc`] - session-aware JSON-RPC transport and envelopes
//! - [`structs`] - command line arguments
//! - [`transmission`] - daemon entities
//! - [`utils`] - Sentry helpers

/// Metrics listener.
pub mod api;

/// Backend clients.
pub mod client;

/// Collection engine.
pub mod collector;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files,
/// command line flags and environment variables.
pub mod config;

/// Metric catalog, registry and exposition.
pub mod metrics;

/// Transmission JSON-RPC transport.
pub mod rpc;

/// Command line arguments.
pub mod structs;

/// Daemon entities.
pub mod transmission;

/// Sentry helpers.
pub mod utils;
