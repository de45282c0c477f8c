use crate::transmission::structs::torrent::Torrent;

impl Torrent {
    pub fn files_total(&self) -> usize {
        self.files.len()
    }
}
