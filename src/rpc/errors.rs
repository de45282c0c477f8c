use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized: the daemon rejected the credentials")]
    Unauthorized,

    #[error("Stale session id: the daemon rejected a freshly acquired session id")]
    StaleSessionToken,

    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("Missing X-Transmission-Session-Id header (HTTP status {0})")]
    MissingSessionToken(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command error: {0}")]
    Command(String),

    #[error("Missing arguments in '{0}' response")]
    MissingArguments(String),
}

impl RpcError {
    /// Authentication failures are never retried.
    pub fn is_authentication(&self) -> bool {
        matches!(self, RpcError::Unauthorized)
    }
}
