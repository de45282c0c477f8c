//! Sentry helpers.

/// Trace transactions, opened only at trace log level.
pub mod sentry_tracing;
