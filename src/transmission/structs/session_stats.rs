use serde::Deserialize;
use crate::transmission::structs::session_state_stats::SessionStateStats;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionStats {
    pub download_speed: i64,
    pub upload_speed: i64,
    pub active_torrent_count: i64,
    pub paused_torrent_count: i64,
    pub torrent_count: i64,
    #[serde(rename = "current-stats")]
    pub current_stats: SessionStateStats,
    #[serde(rename = "cumulative-stats")]
    pub cumulative_stats: SessionStateStats,
}
