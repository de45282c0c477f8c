//! One client per configured Transmission backend.
//!
//! [`TransmissionClient`](structs::transmission_client::TransmissionClient)
//! composes the session-aware transport with the typed commands and exposes
//! them through the [`BackendQuery`](traits::backend_query::BackendQuery)
//! trait the collectors consume.

/// Endpoint and client structures.
pub mod structs;

/// Client implementations.
pub mod impls;

/// The query capability shared by all backends.
pub mod traits;
