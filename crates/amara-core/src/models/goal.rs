use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A user-owned self-care goal, created from care plan templates.
/// `completed` is the only field the user mutates, via toggling.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
