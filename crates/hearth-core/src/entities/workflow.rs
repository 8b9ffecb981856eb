use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{WorkflowKind, WorkflowPriority, WorkflowStatus};

/// A card on the landlord's reorderable workflow list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WorkflowCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: WorkflowKind,
    pub priority: WorkflowPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkflowStatus>,
}

impl WorkflowCard {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.status == Some(WorkflowStatus::Done)
    }
}
