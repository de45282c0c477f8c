use crate::rpc::structs::credentials::Credentials;

/// A single POST to the RPC endpoint. An empty body with no session id is a
/// session id acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcHttpRequest {
    pub url: String,
    pub session_id: Option<String>,
    pub credentials: Option<Credentials>,
    pub body: Vec<u8>,
}
