use std::fmt;
use crate::collector::enums::data_kind::DataKind;

impl DataKind {
    pub fn log_prefix(&self) -> &'static str {
        match self {
            DataKind::Torrents => "TORRENTS",
            DataKind::Session => "SESSION",
            DataKind::SessionStats => "SESSION STATS",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.log_prefix())
    }
}
