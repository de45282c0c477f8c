//! Collection engine.
//!
//! Three collectors, one per data kind, translate daemon state into
//! Prometheus gauges. Each scrape queries every backend concurrently, clears
//! the previous series and a failing backend only drops its own series for
//! that data kind.
//!
//! # Collectors
//!
//! - `TorrentCollector`: per torrent gauges plus tracker statistics,
//!   deduplicated by tracker host
//! - `SessionCollector`: daemon configuration (limits, queues, free space)
//! - `SessionStatsCollector`: transfer counters for the current and the
//!   cumulative session

/// Data kind enumeration.
pub mod enums;

/// Collector structures.
pub mod structs;

/// `Collector` and `MetricCollector` implementations.
pub mod impls;

/// Tracker deduplication and failure reporting.
#[allow(clippy::module_inception)]
pub mod collector;
