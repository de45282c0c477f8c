use async_trait::async_trait;
use prometheus::core::Collector;

/// A Prometheus collector whose series are rebuilt from the backends right
/// before every gather.
#[async_trait]
pub trait MetricCollector: Collector {
    /// Queries every backend and replaces the published series.
    async fn refresh(&self);
}
