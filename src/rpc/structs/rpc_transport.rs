use std::sync::Arc;
use parking_lot::RwLock;
use crate::rpc::structs::credentials::Credentials;
use crate::rpc::traits::rpc_exchange::RpcExchange;

/// Session-aware transport bound to one backend's RPC endpoint.
pub struct RpcTransport {
    pub(crate) url: String,
    pub(crate) credentials: Option<Credentials>,
    pub(crate) session_id: RwLock<Option<String>>,
    pub(crate) exchange: Arc<dyn RpcExchange>,
}
