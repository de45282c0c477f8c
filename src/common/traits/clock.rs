/// A source of the current time, in seconds since the Unix epoch.
///
/// Collectors that derive absolute timestamps from relative durations read
/// "now" through this trait so a scrape can be replayed against a stopped
/// clock.
pub trait Clock: Send + Sync {
    fn timestamp(&self) -> i64;
}
