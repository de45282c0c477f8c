pub mod backend_endpoint;
pub mod transmission_client;
