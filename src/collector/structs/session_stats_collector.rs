use std::sync::Arc;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::common::traits::clock::Clock;
use crate::metrics::structs::metrics_config::MetricsConfig;

pub struct SessionStatsCollector {
    pub(crate) config: MetricsConfig,
    pub(crate) backends: Vec<Arc<dyn BackendQuery>>,
    pub(crate) clock: Arc<dyn Clock>,

    pub(crate) download_speed: GaugeVec,
    pub(crate) upload_speed: GaugeVec,
    pub(crate) torrents_total: GaugeVec,
    pub(crate) torrents_active: GaugeVec,
    pub(crate) torrents_paused: GaugeVec,

    // per session type
    pub(crate) downloaded: GaugeVec,
    pub(crate) uploaded: GaugeVec,
    pub(crate) files_added: GaugeVec,
    pub(crate) active_time: GaugeVec,
    pub(crate) session_count: GaugeVec,
}
