use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Attributes of a monitor group, a named collection used to organize
/// monitors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorGroup {
    /// Server-assigned identifier. Must stay empty when creating a group;
    /// populated from the envelope after any read or write.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Name of the group.
    pub name: String,
    /// Team that should own the resource when using a global API token.
    pub team_name: String,
    /// Position of the group on the status dashboard.
    pub sort_index: i32,
    /// Creation timestamp. Server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp. Server-assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether monitoring is paused for the whole group.
    pub paused: bool,
}

impl Resource for MonitorGroup {
    const COLLECTION: &'static str = "monitor-groups";
    const KIND: &'static str = "monitor group";

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
