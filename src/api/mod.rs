//! Metrics listener.
//!
//! # Endpoints
//!
//! - `GET <metrics_path>` (default `/metrics`) - runs one scrape across all
//!   backends and returns the Prometheus text exposition
//! - `GET /` - landing page linking to the metrics path
//!
//! Anything else answers 404. The listener can serve over TLS with PEM
//! certificate and key files.

/// Server setup, routes and shared handlers.
#[allow(clippy::module_inception)]
pub mod api;

/// Metrics and landing page handlers.
pub mod api_metrics;

/// Shared handler data.
pub mod structs;
