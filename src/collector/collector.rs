use std::collections::HashMap;
use log::{error, warn};
use crate::collector::enums::data_kind::DataKind;
use crate::collector::structs::tracker_summary::TrackerSummary;
use crate::rpc::errors::RpcError;
use crate::transmission::structs::tracker_stat::TrackerStat;

const UNKNOWN_COUNT: i64 = -1;

/// Merges tracker statistics sharing a host. Download counts are summed,
/// leecher and seeder counts come from the last entry seen for the host.
/// Hosts keep the order in which they first appear.
///
/// A negative download count means the tracker did not report one. It never
/// enters the sum; a host without any reported count stays at `-1`.
pub fn dedup_tracker_stats(stats: &[TrackerStat]) -> Vec<TrackerSummary> {
    let mut summaries: Vec<TrackerSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for stat in stats {
        match index.get(stat.host.as_str()) {
            Some(&position) => {
                let summary = &mut summaries[position];
                if stat.download_count >= 0 {
                    summary.downloads = summary.downloads.max(0) + stat.download_count;
                }
                summary.leechers = stat.leecher_count;
                summary.seeders = stat.seeder_count;
            }
            None => {
                index.insert(stat.host.as_str(), summaries.len());
                summaries.push(TrackerSummary {
                    host: stat.host.clone(),
                    downloads: stat.download_count.max(UNKNOWN_COUNT),
                    leechers: stat.leecher_count,
                    seeders: stat.seeder_count,
                });
            }
        }
    }
    summaries
}

pub fn report_backend_failure(kind: DataKind, backend: &str, rpc_error: &RpcError) {
    error!("[{kind}] backend '{backend}' failed: {rpc_error}");
    if rpc_error.is_authentication() {
        warn!("[{kind}] check the username and password configured for backend '{backend}'");
    }
    sentry::capture_error(rpc_error);
}
