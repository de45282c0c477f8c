use crate::config::structs::backend_config::BackendConfig;

impl BackendConfig {
    /// Credentials are only sent when a username is configured.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }
}
