use std::sync::Arc;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::metrics::structs::metrics_config::MetricsConfig;

pub struct SessionCollector {
    pub(crate) config: MetricsConfig,
    pub(crate) backends: Vec<Arc<dyn BackendQuery>>,

    pub(crate) alt_speed_down: GaugeVec,
    pub(crate) alt_speed_up: GaugeVec,
    pub(crate) cache_size: GaugeVec,
    pub(crate) free_space: GaugeVec,
    pub(crate) queue_down: GaugeVec,
    pub(crate) queue_up: GaugeVec,
    pub(crate) peer_limit_global: GaugeVec,
    pub(crate) peer_limit_torrent: GaugeVec,
    pub(crate) seed_ratio_limit: GaugeVec,
    pub(crate) speed_limit_down: GaugeVec,
    pub(crate) speed_limit_up: GaugeVec,
    pub(crate) version: GaugeVec,
}
