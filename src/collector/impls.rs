pub mod data_kind;
pub mod session_collector;
pub mod session_stats_collector;
pub mod torrent_collector;
