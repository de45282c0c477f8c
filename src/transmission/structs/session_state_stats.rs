use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionStateStats {
    pub downloaded_bytes: i64,
    pub uploaded_bytes: i64,
    pub files_added: i64,
    pub seconds_active: i64,
    pub session_count: i64,
}
