use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::credentials::Credentials;
use crate::rpc::structs::rpc_http_request::RpcHttpRequest;
use crate::rpc::structs::rpc_http_response::RpcHttpResponse;
use crate::rpc::structs::rpc_transport::RpcTransport;
use crate::rpc::traits::rpc_exchange::RpcExchange;

pub const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";
pub const RPC_PATH: &str = "/transmission/rpc/";

impl RpcTransport {
    pub fn new(base_url: &str, credentials: Option<Credentials>, exchange: Arc<dyn RpcExchange>) -> RpcTransport {
        RpcTransport {
            url: format!("{}{}", base_url.trim_end_matches('/'), RPC_PATH),
            credentials,
            session_id: RwLock::new(None),
            exchange,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn session_id(&self) -> Option<String> {
        self.session_id.read().clone()
    }

    /// Posts `payload` and returns the response body of a 2xx answer.
    ///
    /// A 409 triggers exactly one session id refresh followed by exactly one
    /// retry. A 401 fails immediately.
    pub async fn post(&self, payload: Vec<u8>) -> Result<Vec<u8>, RpcError> {
        let session_id = match self.session_id() {
            Some(session_id) => session_id,
            None => self.acquire_session_id().await?,
        };

        let response = self.send(payload.clone(), Some(session_id)).await?;
        if response.status != 409 {
            return Self::into_body(response);
        }

        debug!("[RPC] {} rejected the session id, refreshing", self.url);
        let session_id = self.acquire_session_id().await?;
        let retry = self.send(payload, Some(session_id)).await?;
        if retry.status == 409 {
            return Err(RpcError::StaleSessionToken);
        }
        Self::into_body(retry)
    }

    async fn acquire_session_id(&self) -> Result<String, RpcError> {
        let response = self.send(Vec::new(), None).await?;
        if response.status == 401 {
            return Err(RpcError::Unauthorized);
        }
        let Some(session_id) = response.session_id else {
            return Err(RpcError::MissingSessionToken(response.status));
        };
        debug!("[RPC] Acquired session id from {}", self.url);
        *self.session_id.write() = Some(session_id.clone());
        Ok(session_id)
    }

    async fn send(&self, body: Vec<u8>, session_id: Option<String>) -> Result<RpcHttpResponse, RpcError> {
        self.exchange.exchange(RpcHttpRequest {
            url: self.url.clone(),
            session_id,
            credentials: self.credentials.clone(),
            body,
        }).await
    }

    fn into_body(response: RpcHttpResponse) -> Result<Vec<u8>, RpcError> {
        match response.status {
            401 => Err(RpcError::Unauthorized),
            200..=299 => Ok(response.body),
            status => Err(RpcError::HttpStatus(status)),
        }
    }
}
