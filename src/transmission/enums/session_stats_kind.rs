#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatsKind {
    /// Since the daemon was started.
    Current,
    /// Over all daemon runs.
    Cumulative,
}
