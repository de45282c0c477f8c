use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use crate::metrics::structs::shared_collector::SharedCollector;

impl Collector for SharedCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.0.desc()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.0.collect()
    }
}
