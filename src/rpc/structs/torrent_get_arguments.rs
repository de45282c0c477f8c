use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TorrentGetArguments {
    pub fields: Vec<String>,
}
