use serde::{Deserialize, Serialize};

/// Canonical push notification, whatever the source host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PushEvent {
    pub project: String,
    pub branch_ref: String,
    pub commit_id: String,
    pub pusher_name: String,
    pub pusher_email: String,
}

impl PushEvent {
    /// Key used to scope duplicate detection.
    pub fn dedup_key(&self) -> String {
        Self::dedup_key_for(&self.project, &self.branch_ref)
    }

    pub fn dedup_key_for(project: &str, branch_ref: &str) -> String {
        format!("{project}:{branch_ref}")
    }
}
