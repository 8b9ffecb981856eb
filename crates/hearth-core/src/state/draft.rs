use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Attachment, MaintenanceRequest};
use crate::enums::{Category, RequestStatus, Urgency};
use crate::errors::CoreError;
use crate::ids;

/// Tenant request form. Unlike chat submissions nothing is inferred: the
/// tenant picks urgency and category explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestDraft {
    pub description: String,
    pub urgency: Option<Urgency>,
    pub category: Option<Category>,
    /// Optional photo of the problem.
    pub photo: Option<Attachment>,
}

impl RequestDraft {
    /// Validate the form and build an open request dated `now`.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if the description is blank or urgency or
    /// category was not chosen.
    pub fn into_request(
        self,
        id_prefix: &str,
        now: DateTime<Utc>,
    ) -> Result<MaintenanceRequest, CoreError> {
        let (Some(urgency), Some(category)) = (self.urgency, self.category) else {
            return Err(missing_fields());
        };
        if self.description.trim().is_empty() {
            return Err(missing_fields());
        }

        Ok(MaintenanceRequest {
            id: ids::time_based_id(id_prefix, now),
            tenant: None,
            description: self.description,
            urgency,
            category,
            status: RequestStatus::Open,
            date: now.date_naive(),
            attachments: self.photo.map(|photo| vec![photo]),
        })
    }
}

fn missing_fields() -> CoreError {
    CoreError::Validation("Please fill in all required fields.".to_string())
}
