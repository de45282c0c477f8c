use std::sync::Arc;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::metrics::structs::metrics_config::MetricsConfig;

pub struct TorrentCollector {
    pub(crate) config: MetricsConfig,
    pub(crate) backends: Vec<Arc<dyn BackendQuery>>,

    pub(crate) status: GaugeVec,
    pub(crate) added: GaugeVec,
    pub(crate) files: GaugeVec,
    pub(crate) finished: GaugeVec,
    pub(crate) done: GaugeVec,
    pub(crate) ratio: GaugeVec,
    pub(crate) download: GaugeVec,
    pub(crate) upload: GaugeVec,
    pub(crate) peers_getting_from_us: GaugeVec,

    // tracker stats
    pub(crate) downloads: GaugeVec,
    pub(crate) leechers: GaugeVec,
    pub(crate) seeders: GaugeVec,
}
