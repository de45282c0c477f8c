pub mod session;
pub mod session_state_stats;
pub mod session_stats;
pub mod torrent;
pub mod torrent_file;
pub mod torrent_list;
pub mod tracker_stat;
