/// Tracker statistics merged per host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSummary {
    pub host: String,
    pub downloads: i64,
    pub leechers: i64,
    pub seeders: i64,
}
