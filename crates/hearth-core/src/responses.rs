//! CLI response types returned as JSON by `hearth` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{MaintenanceRequest, WorkflowCard};
use crate::enums::Role;
use crate::state::TicketStats;

/// Response from `hearth classify`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClassifyResponse {
    pub is_request: bool,
    pub request: Option<MaintenanceRequest>,
}

impl From<Option<MaintenanceRequest>> for ClassifyResponse {
    fn from(request: Option<MaintenanceRequest>) -> Self {
        Self {
            is_request: request.is_some(),
            request,
        }
    }
}

/// Response from `hearth dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardResponse {
    pub role: Role,
    pub stats: TicketStats,
    pub requests: Vec<MaintenanceRequest>,
    /// Only the landlord dashboard has a workflow list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Vec<WorkflowCard>>,
}
