use crate::transmission::enums::session_stats_kind::SessionStatsKind;

impl SessionStatsKind {
    pub const ALL: [SessionStatsKind; 2] = [SessionStatsKind::Current, SessionStatsKind::Cumulative];

    /// Value of the `type` label.
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatsKind::Current => "current",
            SessionStatsKind::Cumulative => "cumulative",
        }
    }
}
