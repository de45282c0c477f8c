//! Daemon entities as returned by the Transmission RPC.
//!
//! Fields the daemon omits deserialize to their zero value, so a response
//! from an older daemon version never fails to decode.

/// Session statistics variants.
pub mod enums;

/// Torrent, tracker, session and statistics payloads.
pub mod structs;

/// Helpers on the entities.
pub mod impls;
