use serde::Deserialize;

/// Swarm statistics a torrent received from one tracker. Several entries can
/// share a `host` across tiers.
///
/// Only the counters are decoded. The remaining tracker fields changed type
/// between daemon releases and are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerStat {
    pub host: String,
    /// `-1` when the tracker did not report it.
    pub download_count: i64,
    pub leecher_count: i64,
    pub seeder_count: i64,
}
