use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Attachment;
use crate::enums::{Category, RequestStatus, Urgency};

/// A maintenance ticket, either seeded on a dashboard or fabricated from a
/// chat message by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MaintenanceRequest {
    pub id: String,
    /// Reporting tenant. Only landlord-side tickets carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    /// Original text as typed, casing untouched.
    pub description: String,
    pub urgency: Urgency,
    pub category: Category,
    pub status: RequestStatus,
    /// Creation date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Files submitted alongside the message. Absent rather than empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl MaintenanceRequest {
    /// Attachments as a slice, empty when none were supplied.
    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        self.attachments.as_deref().unwrap_or_default()
    }
}
