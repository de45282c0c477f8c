use serde::Deserialize;
use crate::transmission::structs::torrent::Torrent;

/// `torrent-get` arguments.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct TorrentList {
    pub torrents: Vec<Torrent>,
}
