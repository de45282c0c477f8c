//! Transmission JSON-RPC plumbing.
//!
//! The daemon protects its RPC endpoint with an anti-CSRF session id. Every
//! request carries the `X-Transmission-Session-Id` header; a missing or stale
//! id is answered with HTTP 409 and the exporter has to fetch a fresh one.
//!
//! # Layers
//!
//! - [`RpcRequest`](enums::rpc_request::RpcRequest) and
//!   [`RpcResponse`](structs::rpc_response::RpcResponse) are the typed
//!   command envelopes.
//! - [`RpcTransport`](structs::rpc_transport::RpcTransport) owns the session
//!   id of one backend and runs the acquire / retry handshake.
//! - [`RpcExchange`](traits::rpc_exchange::RpcExchange) is the raw HTTP
//!   round trip, implemented with reqwest by
//!   [`ReqwestExchange`](structs::reqwest_exchange::ReqwestExchange).

/// Request envelopes.
pub mod enums;

/// Response envelopes, HTTP exchange types and the transport.
pub mod structs;

/// Implementation blocks.
pub mod impls;

/// The HTTP exchange seam.
pub mod traits;

/// RPC error type.
pub mod errors;
