pub mod rpc_exchange;
