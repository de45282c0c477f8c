pub mod rpc_request;
