//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the exporter.
//!
//! # Utilities
//!
//! - Logging setup
//! - Listener address parsing
//! - Boolean to label value conversion
//! - Wall clock abstraction
//!
//! # Data Structures
//!
//! - `CustomError` - Ad-hoc error type for startup failures
//! - `SystemClock` - Clock backed by the system time
//!
//! # Example
//!
//! ```rust,ignore
//! use transmission_exporter::common::common::{bool_to_label, parse_bind_address};
//!
//! assert_eq!(bool_to_label(true), "1");
//! let address = parse_bind_address(":19091")?;
//! ```

/// Common data structures (errors, clocks).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Shared trait definitions.
pub mod traits;
