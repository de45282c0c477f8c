use crate::transmission::enums::session_stats_kind::SessionStatsKind;
use crate::transmission::structs::session_state_stats::SessionStateStats;
use crate::transmission::structs::session_stats::SessionStats;

impl SessionStats {
    pub fn state(&self, kind: SessionStatsKind) -> &SessionStateStats {
        match kind {
            SessionStatsKind::Current => &self.current_stats,
            SessionStatsKind::Cumulative => &self.cumulative_stats,
        }
    }
}
