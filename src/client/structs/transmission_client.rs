use crate::client::structs::backend_endpoint::BackendEndpoint;
use crate::rpc::structs::rpc_transport::RpcTransport;

pub struct TransmissionClient {
    pub(crate) endpoint: BackendEndpoint,
    pub(crate) transport: RpcTransport,
}
