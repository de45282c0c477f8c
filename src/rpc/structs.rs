pub mod credentials;
pub mod reqwest_exchange;
pub mod rpc_http_request;
pub mod rpc_http_response;
pub mod rpc_response;
pub mod rpc_transport;
pub mod torrent_get_arguments;
