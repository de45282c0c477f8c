use std::sync::Arc;
use prometheus::Registry;
use tokio::sync::Mutex;
use crate::metrics::traits::metric_collector::MetricCollector;

pub struct MetricsRegistry {
    pub(crate) registry: Registry,
    pub(crate) collectors: Vec<Arc<dyn MetricCollector>>,
    /// Held from refresh to gather so concurrent scrapes never interleave.
    pub(crate) scrape: Mutex<()>,
}
