pub mod session_stats;
pub mod session_stats_kind;
pub mod torrent;
