//! Metric registry and Prometheus text exposition.
//!
//! Every exported series is a gauge. Each collector owns its
//! [`GaugeVec`](prometheus::GaugeVec)s and implements both
//! [`prometheus::core::Collector`] and the async
//! [`MetricCollector`](traits::metric_collector::MetricCollector) refresh.
//! The [`MetricsRegistry`](structs::metrics_registry::MetricsRegistry)
//! refreshes all collectors concurrently, gathers them through a
//! [`prometheus::Registry`] and encodes exposition format 0.0.4 with the
//! [`TextEncoder`](prometheus::TextEncoder).

/// Configuration, registry and collector handle structures.
pub mod structs;

/// Implementation blocks.
pub mod impls;

/// The collector contract.
pub mod traits;

/// Registry error type.
pub mod errors;
