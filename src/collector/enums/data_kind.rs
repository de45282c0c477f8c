#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Torrents,
    Session,
    SessionStats,
}
