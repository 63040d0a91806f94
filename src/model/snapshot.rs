use serde::{Deserialize, Serialize};

/// One recorded change event for a concrete component version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub id: String,
    /// RFC 3339 timestamp as issued by the server.
    pub at: String,
    pub actor: String,
    pub diff_text: String,
    pub raw_json: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_notes_html: Option<String>,
}

impl SnapshotRecord {
    pub fn id_str(&self) -> &str {
        &self.id
    }
}
