use crate::rpc::enums::rpc_request::RpcRequest;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::torrent_get_arguments::TorrentGetArguments;

/// Fields requested by `torrent-get`.
pub const TORRENT_FIELDS: [&str; 22] = [
    "id",
    "name",
    "hashString",
    "status",
    "addedDate",
    "leftUntilDone",
    "eta",
    "uploadRatio",
    "rateDownload",
    "rateUpload",
    "downloadDir",
    "isFinished",
    "percentDone",
    "seedRatioMode",
    "error",
    "errorString",
    "files",
    "fileStats",
    "peers",
    "trackerStats",
    "peersGettingFromUs",
    "totalSize",
];

impl RpcRequest {
    pub fn torrent_get() -> RpcRequest {
        RpcRequest::TorrentGet(TorrentGetArguments {
            fields: TORRENT_FIELDS.iter().map(|field| field.to_string()).collect(),
        })
    }

    pub fn method(&self) -> &'static str {
        match self {
            RpcRequest::TorrentGet(_) => "torrent-get",
            RpcRequest::SessionGet => "session-get",
            RpcRequest::SessionStats => "session-stats",
        }
    }

    pub fn to_payload(&self) -> Result<Vec<u8>, RpcError> {
        Ok(serde_json::to_vec(self)?)
    }
}
