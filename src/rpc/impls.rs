pub mod reqwest_exchange;
pub mod rpc_request;
pub mod rpc_response;
pub mod rpc_transport;
