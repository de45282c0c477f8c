use std::sync::Arc;
use async_trait::async_trait;
use futures_util::future::join_all;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::GaugeVec;
use crate::client::traits::backend_query::BackendQuery;
use crate::collector::collector::{dedup_tracker_stats, report_backend_failure};
use crate::collector::enums::data_kind::DataKind;
use crate::collector::structs::torrent_collector::TorrentCollector;
use crate::metrics::errors::MetricsError;
use crate::metrics::structs::metrics_config::MetricsConfig;
use crate::metrics::traits::metric_collector::MetricCollector;
use crate::transmission::structs::torrent::Torrent;

impl TorrentCollector {
    pub fn new(config: MetricsConfig, backends: Vec<Arc<dyn BackendQuery>>) -> Result<TorrentCollector, MetricsError> {
        let torrent = ["id", "name"];
        let tracker = ["id", "name", "tracker"];
        Ok(TorrentCollector {
            status: config.gauge_vec("torrent_status", "Status of a torrent", &torrent)?,
            added: config.gauge_vec("torrent_added", "The unixtime time a torrent was added", &torrent)?,
            files: config.gauge_vec("torrent_files_total", "The total number of files in a torrent", &torrent)?,
            finished: config.gauge_vec("torrent_finished", "Indicates if a torrent is finished (1) or not (0)", &torrent)?,
            done: config.gauge_vec("torrent_done", "The percent of a torrent being done", &torrent)?,
            ratio: config.gauge_vec("torrent_ratio", "The upload ratio of a torrent", &torrent)?,
            download: config.gauge_vec("torrent_download_bytes", "The current download rate of a torrent in bytes", &torrent)?,
            upload: config.gauge_vec("torrent_upload_bytes", "The current upload rate of a torrent in bytes", &torrent)?,
            peers_getting_from_us: config.gauge_vec("torrent_peers_getting_from_us", "The current number of peers downloading from us", &torrent)?,
            downloads: config.gauge_vec("torrent_downloads_total", "How often this torrent was downloaded", &tracker)?,
            leechers: config.gauge_vec("torrent_leechers", "The number of peers downloading this torrent", &tracker)?,
            seeders: config.gauge_vec("torrent_seeders", "The number of peers uploading this torrent", &tracker)?,
            config,
            backends,
        })
    }

    fn gauges(&self) -> [&GaugeVec; 12] {
        [
            &self.status,
            &self.added,
            &self.files,
            &self.finished,
            &self.done,
            &self.ratio,
            &self.download,
            &self.upload,
            &self.downloads,
            &self.leechers,
            &self.seeders,
            &self.peers_getting_from_us,
        ]
    }

    /// Publishes the gauges of one torrent and its deduplicated trackers.
    pub fn observe_torrent(&self, backend: &str, torrent: &Torrent) {
        let id = torrent.id.to_string();
        let labels = self.config.label_values(backend, &[id.as_str(), torrent.name.as_str()]);
        let gauges = [
            (&self.status, torrent.status as f64),
            (&self.added, torrent.added as f64),
            (&self.files, torrent.files_total() as f64),
            (&self.finished, if torrent.is_finished { 1.0 } else { 0.0 }),
            (&self.done, torrent.percent_done),
            (&self.ratio, torrent.upload_ratio),
            (&self.download, torrent.rate_download as f64),
            (&self.upload, torrent.rate_upload as f64),
            (&self.peers_getting_from_us, torrent.peers_getting_from_us as f64),
        ];
        for (gauge, value) in gauges {
            gauge.with_label_values(&labels).set(value);
        }

        for tracker in dedup_tracker_stats(&torrent.tracker_stats) {
            let labels = self.config.label_values(backend, &[id.as_str(), torrent.name.as_str(), tracker.host.as_str()]);
            self.downloads.with_label_values(&labels).set(tracker.downloads as f64);
            self.leechers.with_label_values(&labels).set(tracker.leechers as f64);
            self.seeders.with_label_values(&labels).set(tracker.seeders as f64);
        }
    }
}

impl Collector for TorrentCollector {
    fn desc(&self) -> Vec<&Desc> {
        self.gauges().into_iter().flat_map(|gauge| gauge.desc()).collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.gauges().into_iter().flat_map(|gauge| gauge.collect()).collect()
    }
}

#[async_trait]
impl MetricCollector for TorrentCollector {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn refresh(&self) {
        let results = join_all(self.backends.iter().map(|backend| backend.get_torrents())).await;
        for gauge in self.gauges() {
            gauge.reset();
        }
        for (backend, result) in self.backends.iter().zip(results) {
            match result {
                Ok(torrents) => {
                    for torrent in &torrents {
                        self.observe_torrent(backend.name(), torrent);
                    }
                }
                Err(error) => report_backend_failure(DataKind::Torrents, backend.name(), &error),
            }
        }
    }
}
