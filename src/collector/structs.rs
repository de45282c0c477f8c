pub mod session_collector;
pub mod session_stats_collector;
pub mod torrent_collector;
pub mod tracker_summary;
