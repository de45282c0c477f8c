use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::join_all;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::collector::collector::report_backend_failure;
use crate::collector::enums::data_kind::DataKind;
use crate::collector::structs::session_stats_collector::SessionStatsCollector;
use crate::common::traits::clock::Clock;
use crate::metrics::errors::MetricsError;
use crate::metrics::structs::metrics_config::MetricsConfig;
use crate::metrics::traits::metric_collector::MetricCollector;
use crate::transmission::enums::session_stats_kind::SessionStatsKind;
use crate::transmission::structs::session_stats::SessionStats;

impl SessionStatsCollector {
    pub fn new(config: MetricsConfig, backends: Vec<Arc<dyn BackendQuery>>, clock: Arc<dyn Clock>) -> Result<SessionStatsCollector, MetricsError> {
        let kind = ["type"];
        Ok(SessionStatsCollector {
            download_speed: config.gauge_vec("session_stats_download_speed_bytes", "Current download speed in bytes", &[])?,
            upload_speed: config.gauge_vec("session_stats_upload_speed_bytes", "Current upload speed in bytes", &[])?,
            torrents_total: config.gauge_vec("session_stats_torrents_total", "The total number of torrents", &[])?,
            torrents_active: config.gauge_vec("session_stats_torrents_active", "The number of active torrents", &[])?,
            torrents_paused: config.gauge_vec("session_stats_torrents_paused", "The number of paused torrents", &[])?,
            downloaded: config.gauge_vec("session_stats_downloaded_bytes", "The number of downloaded bytes", &kind)?,
            uploaded: config.gauge_vec("session_stats_uploaded_bytes", "The number of uploaded bytes", &kind)?,
            files_added: config.gauge_vec("session_stats_files_added", "The number of files added", &kind)?,
            active_time: config.gauge_vec("session_stats_active", "The time transmission is active since", &kind)?,
            session_count: config.gauge_vec("session_stats_sessions", "Count of the times transmission started", &kind)?,
            config,
            backends,
            clock,
        })
    }

    fn gauges(&self) -> [&GaugeVec; 10] {
        [
            &self.download_speed,
            &self.upload_speed,
            &self.torrents_total,
            &self.torrents_active,
            &self.torrents_paused,
            &self.downloaded,
            &self.uploaded,
            &self.files_added,
            &self.active_time,
            &self.session_count,
        ]
    }

    pub fn observe_session_stats(&self, backend: &str, stats: &SessionStats) {
        let unlabeled = self.config.label_values(backend, &[]);
        self.download_speed.with_label_values(&unlabeled).set(stats.download_speed as f64);
        self.upload_speed.with_label_values(&unlabeled).set(stats.upload_speed as f64);
        self.torrents_total.with_label_values(&unlabeled).set(stats.torrent_count as f64);
        self.torrents_active.with_label_values(&unlabeled).set(stats.active_torrent_count as f64);
        self.torrents_paused.with_label_values(&unlabeled).set(stats.paused_torrent_count as f64);

        let now = self.clock.timestamp();
        for kind in SessionStatsKind::ALL {
            let state = stats.state(kind);
            let labels = self.config.label_values(backend, &[kind.label()]);
            self.downloaded.with_label_values(&labels).set(state.downloaded_bytes as f64);
            self.uploaded.with_label_values(&labels).set(state.uploaded_bytes as f64);
            self.files_added.with_label_values(&labels).set(state.files_added as f64);
            self.active_time.with_label_values(&labels).set((now - state.seconds_active) as f64);
            self.session_count.with_label_values(&labels).set(state.session_count as f64);
        }
    }
}

impl Collector for SessionStatsCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauges().into_iter().flat_map(|gauge| gauge.desc()).collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.gauges().into_iter().flat_map(|gauge| gauge.collect()).collect()
    }
}

#[async_trait]
impl MetricCollector for SessionStatsCollector {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn refresh(&self) {
        let results = join_all(self.backends.iter().map(|backend| backend.get_session_stats())).await;
        for gauge in self.gauges() {
            gauge.reset();
        }
        for (backend, result) in self.backends.iter().zip(results) {
            match result {
                Ok(stats) => self.observe_session_stats(backend.name(), &stats),
                Err(error) => report_backend_failure(DataKind::SessionStats, backend.name(), &error),
            }
        }
    }
}
