use async_trait::async_trait;
use crate::rpc::errors::RpcError;
use crate::transmission::structs::session::Session;
use crate::transmission::structs::session_stats::SessionStats;
use crate::transmission::structs::torrent::Torrent;

#[async_trait]
pub trait BackendQuery: Send + Sync {
    /// Value of the `backend` label.
    fn name(&self) -> &str;

    async fn get_torrents(&self) -> Result<Vec<Torrent>, RpcError>;

    async fn get_session(&self) -> Result<Session, RpcError>;

    async fn get_session_stats(&self) -> Result<SessionStats, RpcError>;
}
