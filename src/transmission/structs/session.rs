use serde::Deserialize;

/// `session-get` arguments. Speeds are in KB/s, the cache in MB.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct Session {
    pub alt_speed_down: i64,
    pub alt_speed_enabled: bool,
    pub alt_speed_up: i64,
    pub cache_size_mb: i64,
    pub download_dir: String,
    pub download_dir_free_space: i64,
    pub download_queue_enabled: bool,
    pub download_queue_size: i64,
    pub incomplete_dir: String,
    pub peer_limit_global: i64,
    pub peer_limit_per_torrent: i64,
    pub seed_queue_enabled: bool,
    pub seed_queue_size: i64,
    #[serde(rename = "seedRatioLimit")]
    pub seed_ratio_limit: f64,
    #[serde(rename = "seedRatioLimited")]
    pub seed_ratio_limited: bool,
    pub speed_limit_down: i64,
    pub speed_limit_down_enabled: bool,
    pub speed_limit_up: i64,
    pub speed_limit_up_enabled: bool,
    pub rpc_version: i64,
    pub version: String,
}
