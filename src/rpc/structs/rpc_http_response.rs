#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcHttpResponse {
    pub status: u16,
    pub session_id: Option<String>,
    pub body: Vec<u8>,
}
