use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TorrentFile {
    pub bytes_completed: i64,
    pub length: i64,
    pub name: String,
}
