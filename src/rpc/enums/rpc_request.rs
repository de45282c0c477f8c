use serde::Serialize;
use crate::rpc::structs::torrent_get_arguments::TorrentGetArguments;

/// One variant per supported RPC method. Argument-less methods serialize
/// without an `arguments` key.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "method", content = "arguments", rename_all = "kebab-case")]
pub enum RpcRequest {
    TorrentGet(TorrentGetArguments),
    SessionGet,
    SessionStats,
}
