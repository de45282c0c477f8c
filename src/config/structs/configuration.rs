use serde::{Deserialize, Serialize};
use crate::config::structs::backend_config::BackendConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::web_config::WebConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default = "Configuration::default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub always_label_backend: bool,
    #[serde(default = "Configuration::default_rpc_request_timeout")]
    pub rpc_request_timeout: u64,
    pub web: WebConfig,
    pub backends: Vec<BackendConfig>,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
