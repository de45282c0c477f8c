use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use crate::rpc::errors::RpcError;
use crate::rpc::impls::rpc_transport::SESSION_ID_HEADER;
use crate::rpc::structs::reqwest_exchange::ReqwestExchange;
use crate::rpc::structs::rpc_http_request::RpcHttpRequest;
use crate::rpc::structs::rpc_http_response::RpcHttpResponse;
use crate::rpc::traits::rpc_exchange::RpcExchange;

impl ReqwestExchange {
    pub fn new(timeout: Duration) -> Result<ReqwestExchange, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("transmission-exporter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ReqwestExchange { client })
    }
}

#[async_trait]
impl RpcExchange for ReqwestExchange {
    async fn exchange(&self, request: RpcHttpRequest) -> Result<RpcHttpResponse, RpcError> {
        let mut builder = self.client
            .post(&request.url)
            .header(CONTENT_TYPE, "application/json")
            .body(request.body);
        if let Some(session_id) = request.session_id {
            builder = builder.header(SESSION_ID_HEADER, session_id);
        }
        if let Some(credentials) = request.credentials {
            builder = builder.basic_auth(credentials.username, Some(credentials.password));
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let session_id = response.headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let body = response.bytes().await?.to_vec();
        Ok(RpcHttpResponse { status, session_id, body })
    }
}
