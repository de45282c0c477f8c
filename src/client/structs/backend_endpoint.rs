use crate::rpc::structs::credentials::Credentials;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEndpoint {
    pub name: String,
    pub address: String,
    pub credentials: Option<Credentials>,
}
