use serde::Deserialize;
use crate::transmission::structs::torrent_file::TorrentFile;
use crate::transmission::structs::tracker_stat::TrackerStat;

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Torrent {
    pub id: i64,
    pub name: String,
    pub hash_string: String,
    pub status: i64,
    #[serde(rename = "addedDate")]
    pub added: i64,
    pub left_until_done: i64,
    pub eta: i64,
    pub upload_ratio: f64,
    pub rate_download: i64,
    pub rate_upload: i64,
    pub download_dir: String,
    pub is_finished: bool,
    pub percent_done: f64,
    pub seed_ratio_mode: i64,
    pub error: i64,
    pub error_string: String,
    pub files: Vec<TorrentFile>,
    pub peers_getting_from_us: i64,
    pub total_size: i64,
    pub tracker_stats: Vec<TrackerStat>,
}
