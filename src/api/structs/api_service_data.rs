//! Shared data context for request handlers.

use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::metrics::structs::metrics_registry::MetricsRegistry;

/// Injected into actix-web's application data; one instance shared by all
/// workers.
pub struct ApiServiceData {
    /// Every collector of the exporter.
    pub registry: Arc<MetricsRegistry>,

    pub config: Arc<Configuration>,
}
