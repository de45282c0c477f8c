use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use crate::client::structs::backend_endpoint::BackendEndpoint;
use crate::client::structs::transmission_client::TransmissionClient;
use crate::client::traits::backend_query::BackendQuery;
use crate::config::structs::configuration::Configuration;
use crate::rpc::enums::rpc_request::RpcRequest;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::reqwest_exchange::ReqwestExchange;
use crate::rpc::structs::rpc_response::RpcResponse;
use crate::rpc::structs::rpc_transport::RpcTransport;
use crate::rpc::traits::rpc_exchange::RpcExchange;
use crate::transmission::structs::session::Session;
use crate::transmission::structs::session_stats::SessionStats;
use crate::transmission::structs::torrent::Torrent;
use crate::transmission::structs::torrent_list::TorrentList;

impl TransmissionClient {
    pub fn new(endpoint: BackendEndpoint, exchange: Arc<dyn RpcExchange>) -> TransmissionClient {
        let transport = RpcTransport::new(&endpoint.address, endpoint.credentials.clone(), exchange);
        TransmissionClient { endpoint, transport }
    }

    /// Builds one client per configured backend, sharing a single HTTP
    /// connection pool.
    pub fn from_config(config: &Configuration) -> Result<Vec<Arc<dyn BackendQuery>>, RpcError> {
        let exchange: Arc<dyn RpcExchange> = Arc::new(ReqwestExchange::new(Duration::from_secs(config.rpc_request_timeout))?);
        Ok(config.backends.iter().map(|backend| {
            let client: Arc<dyn BackendQuery> = Arc::new(TransmissionClient::new(BackendEndpoint::from(backend), exchange.clone()));
            client
        }).collect())
    }

    async fn command<T: DeserializeOwned>(&self, request: RpcRequest) -> Result<T, RpcError> {
        debug!("[RPC] {} -> {}", self.endpoint.name, request.method());
        let body = self.transport.post(request.to_payload()?).await?;
        RpcResponse::<T>::from_slice(&body)?.into_arguments(request.method())
    }
}

#[async_trait]
impl BackendQuery for TransmissionClient {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    async fn get_torrents(&self) -> Result<Vec<Torrent>, RpcError> {
        let list: TorrentList = self.command(RpcRequest::torrent_get()).await?;
        Ok(list.torrents)
    }

    async fn get_session(&self) -> Result<Session, RpcError> {
        self.command(RpcRequest::SessionGet).await
    }

    async fn get_session_stats(&self) -> Result<SessionStats, RpcError> {
        self.command(RpcRequest::SessionStats).await
    }
}
