use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::join_all;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::collector::collector::report_backend_failure;
use crate::collector::enums::data_kind::DataKind;
use crate::collector::structs::session_collector::SessionCollector;
use crate::common::common::bool_to_label;
use crate::metrics::errors::MetricsError;
use crate::metrics::structs::metrics_config::MetricsConfig;
use crate::metrics::traits::metric_collector::MetricCollector;
use crate::transmission::structs::session::Session;

const MEGABYTE: i64 = 1024 * 1024;

impl SessionCollector {
    pub fn new(config: MetricsConfig, backends: Vec<Arc<dyn BackendQuery>>) -> Result<SessionCollector, MetricsError> {
        let enabled = ["enabled"];
        Ok(SessionCollector {
            alt_speed_down: config.gauge_vec("alt_speed_down", "Alternative max global download speed", &enabled)?,
            alt_speed_up: config.gauge_vec("alt_speed_up", "Alternative max global upload speed", &enabled)?,
            cache_size: config.gauge_vec("cache_size_bytes", "Maximum size of the disk cache", &[])?,
            free_space: config.gauge_vec("free_space", "Free space left on device to download to", &["download_dir", "incomplete_dir"])?,
            queue_down: config.gauge_vec("queue_down", "Max number of torrents to download at once", &enabled)?,
            queue_up: config.gauge_vec("queue_up", "Max number of torrents to upload at once", &enabled)?,
            peer_limit_global: config.gauge_vec("global_peer_limit", "Maximum global number of peers", &[])?,
            peer_limit_torrent: config.gauge_vec("torrent_peer_limit", "Maximum number of peers for a single torrent", &[])?,
            seed_ratio_limit: config.gauge_vec("seed_ratio_limit", "The default seed ratio for torrents to use", &enabled)?,
            speed_limit_down: config.gauge_vec("speed_limit_down_bytes", "Max global download speed", &enabled)?,
            speed_limit_up: config.gauge_vec("speed_limit_up_bytes", "Max global upload speed", &enabled)?,
            version: config.gauge_vec("version", "Transmission version as label", &["version"])?,
            config,
            backends,
        })
    }

    fn gauges(&self) -> [&GaugeVec; 12] {
        [
            &self.alt_speed_down,
            &self.alt_speed_up,
            &self.cache_size,
            &self.free_space,
            &self.queue_down,
            &self.queue_up,
            &self.peer_limit_global,
            &self.peer_limit_torrent,
            &self.seed_ratio_limit,
            &self.speed_limit_down,
            &self.speed_limit_up,
            &self.version,
        ]
    }

    pub fn observe_session(&self, backend: &str, session: &Session) {
        let unlabeled = self.config.label_values(backend, &[]);
        let alt_speed = self.config.label_values(backend, &[bool_to_label(session.alt_speed_enabled)]);

        self.alt_speed_down.with_label_values(&alt_speed).set(session.alt_speed_down as f64);
        self.alt_speed_up.with_label_values(&alt_speed).set(session.alt_speed_up as f64);
        self.cache_size.with_label_values(&unlabeled).set((session.cache_size_mb * MEGABYTE) as f64);
        self.free_space
            .with_label_values(&self.config.label_values(backend, &[session.download_dir.as_str(), session.incomplete_dir.as_str()]))
            .set(session.download_dir_free_space as f64);
        self.queue_down
            .with_label_values(&self.config.label_values(backend, &[bool_to_label(session.download_queue_enabled)]))
            .set(session.download_queue_size as f64);
        self.queue_up
            .with_label_values(&self.config.label_values(backend, &[bool_to_label(session.seed_queue_enabled)]))
            .set(session.seed_queue_size as f64);
        self.peer_limit_global.with_label_values(&unlabeled).set(session.peer_limit_global as f64);
        self.peer_limit_torrent.with_label_values(&unlabeled).set(session.peer_limit_per_torrent as f64);
        self.seed_ratio_limit
            .with_label_values(&self.config.label_values(backend, &[bool_to_label(session.seed_ratio_limited)]))
            .set(session.seed_ratio_limit);
        self.speed_limit_down
            .with_label_values(&self.config.label_values(backend, &[bool_to_label(session.speed_limit_down_enabled)]))
            .set(session.speed_limit_down as f64);
        self.speed_limit_up
            .with_label_values(&self.config.label_values(backend, &[bool_to_label(session.speed_limit_up_enabled)]))
            .set(session.speed_limit_up as f64);
        self.version
            .with_label_values(&self.config.label_values(backend, &[session.version.as_str()]))
            .set(1.0);
    }
}

impl Collector for SessionCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauges().into_iter().flat_map(|gauge| gauge.desc()).collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.gauges().into_iter().flat_map(|gauge| gauge.collect()).collect()
    }
}

#[async_trait]
impl MetricCollector for SessionCollector {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn refresh(&self) {
        let results = join_all(self.backends.iter().map(|backend| backend.get_session())).await;
        for gauge in self.gauges() {
            gauge.reset();
        }
        for (backend, result) in self.backends.iter().zip(results) {
            match result {
                Ok(session) => self.observe_session(backend.name(), &session),
                Err(error) => report_backend_failure(DataKind::Session, backend.name(), &error),
            }
        }
    }
}
