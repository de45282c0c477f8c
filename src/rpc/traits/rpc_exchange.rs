use async_trait::async_trait;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::rpc_http_request::RpcHttpRequest;
use crate::rpc::structs::rpc_http_response::RpcHttpResponse;

/// One raw HTTP round trip. Non-2xx statuses are returned, not raised; only
/// connection level failures are errors here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcExchange: Send + Sync {
    async fn exchange(&self, request: RpcHttpRequest) -> Result<RpcHttpResponse, RpcError>;
}
