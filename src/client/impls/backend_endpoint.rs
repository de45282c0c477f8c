use crate::client::structs::backend_endpoint::BackendEndpoint;
use crate::config::structs::backend_config::BackendConfig;
use crate::rpc::structs::credentials::Credentials;

impl From<&BackendConfig> for BackendEndpoint {
    fn from(config: &BackendConfig) -> BackendEndpoint {
        let credentials = match config.has_credentials() {
            true => Some(Credentials {
                username: config.username.clone(),
                password: config.password.clone(),
            }),
            false => None,
        };
        BackendEndpoint {
            name: match config.name.is_empty() {
                true => config.address.clone(),
                false => config.name.clone(),
            },
            address: config.address.clone(),
            credentials,
        }
    }
}
