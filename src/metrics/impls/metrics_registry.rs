use std::sync::Arc;
use futures_util::future::join_all;
use log::debug;
use prometheus::proto::MetricFamily;
use prometheus::{Encoder, Registry, TextEncoder};
use tokio::sync::Mutex;
use crate::metrics::errors::MetricsError;
use crate::metrics::structs::metrics_registry::MetricsRegistry;
use crate::metrics::structs::shared_collector::SharedCollector;
use crate::metrics::traits::metric_collector::MetricCollector;
use crate::utils::sentry_tracing::start_trace_transaction;

impl Default for MetricsRegistry {
    fn default() -> Self {
        MetricsRegistry::new()
    }
}

impl MetricsRegistry {
    pub fn new() -> MetricsRegistry {
        MetricsRegistry {
            registry: Registry::new(),
            collectors: Vec::new(),
            scrape: Mutex::new(()),
        }
    }

    /// Adds a collector. Fails without registering anything when one of its
    /// metric names is already taken.
    pub fn register(&mut self, collector: Arc<dyn MetricCollector>) -> Result<(), MetricsError> {
        let known = self.describe();
        let mut names: Vec<String> = Vec::new();
        for desc in collector.desc() {
            if known.contains(&desc.fq_name) || names.contains(&desc.fq_name) {
                return Err(MetricsError::DuplicateDescriptor(desc.fq_name.clone()));
            }
            names.push(desc.fq_name.clone());
        }
        self.registry.register(Box::new(SharedCollector(collector.clone())))?;
        debug!("[METRICS] Registered collector with {} metrics", names.len());
        self.collectors.push(collector);
        Ok(())
    }

    /// Names of every registered metric, whether or not it currently has
    /// series.
    pub fn describe(&self) -> Vec<String> {
        self.collectors.iter()
            .flat_map(|collector| collector.desc().into_iter().map(|desc| desc.fq_name.clone()).collect::<Vec<String>>())
            .collect()
    }

    /// Refreshes every collector concurrently, then gathers. Families without
    /// series are left out.
    pub async fn gather(&self) -> Vec<MetricFamily> {
        let _scrape = self.scrape.lock().await;
        join_all(self.collectors.iter().map(|collector| collector.refresh())).await;
        self.registry.gather()
    }

    /// One scrape in text exposition format.
    pub async fn render(&self) -> Result<String, MetricsError> {
        let transaction = start_trace_transaction("metrics", "render");

        let families = self.gather().await;
        let mut buffer = Vec::new();
        let encoded = TextEncoder::new().encode(&families, &mut buffer);

        if let Some(transaction) = transaction {
            transaction.finish();
        }
        encoded?;
        debug!("[METRICS] Rendered {} metric families", families.len());
        Ok(String::from_utf8(buffer)?)
    }
}
