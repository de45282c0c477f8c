use std::sync::Arc;
use crate::metrics::traits::metric_collector::MetricCollector;

/// Registers a collector with the Prometheus registry while the
/// [`MetricsRegistry`](crate::metrics::structs::metrics_registry::MetricsRegistry)
/// keeps refreshing it.
pub struct SharedCollector(pub(crate) Arc<dyn MetricCollector>);
