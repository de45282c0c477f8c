pub mod session_stats_kind;
