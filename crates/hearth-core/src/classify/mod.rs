//! Free-text to maintenance-request classification.
//!
//! The classifier is a pure function of the message text, the staged
//! attachments, and the creation instant. It reads only the static rule tables
//! in [`rules`] and never fails: text that does not look like a request simply
//! yields `None`.

pub mod rules;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Attachment, MaintenanceRequest};
use crate::enums::{Category, RequestStatus, Urgency};
use crate::ids;

/// Urgency and category extracted from a message, before an id or date is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    pub urgency: Urgency,
    pub category: Category,
}

/// Turns chat messages into maintenance requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestClassifier {
    id_prefix: String,
}

impl Default for RequestClassifier {
    fn default() -> Self {
        Self::with_id_prefix(ids::PREFIX_REQUEST)
    }
}

impl RequestClassifier {
    #[must_use]
    pub fn with_id_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: prefix.into(),
        }
    }

    #[must_use]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }

    /// Detection gate plus urgency and category extraction.
    #[must_use]
    pub fn detect(text: &str) -> Option<Classification> {
        let lowered = text.to_lowercase();
        if !rules::is_request(&lowered) {
            return None;
        }
        Some(Classification {
            urgency: rules::URGENCY_RULES.resolve(&lowered),
            category: rules::CATEGORY_RULES.resolve(&lowered),
        })
    }

    /// Classify `text` as of now.
    #[must_use]
    pub fn classify(&self, text: &str, attachments: &[Attachment]) -> Option<MaintenanceRequest> {
        self.classify_at(text, attachments, Utc::now())
    }

    /// Classify `text` as of `now`. The request date is the UTC calendar day of `now`.
    #[must_use]
    pub fn classify_at(
        &self,
        text: &str,
        attachments: &[Attachment],
        now: DateTime<Utc>,
    ) -> Option<MaintenanceRequest> {
        let Some(Classification { urgency, category }) = Self::detect(text) else {
            tracing::debug!(len = text.len(), "message does not look like a maintenance request");
            return None;
        };

        let request = MaintenanceRequest {
            id: ids::time_based_id(&self.id_prefix, now),
            tenant: None,
            description: text.to_string(),
            urgency,
            category,
            status: RequestStatus::Open,
            date: now.date_naive(),
            attachments: (!attachments.is_empty()).then(|| attachments.to_vec()),
        };
        tracing::debug!(
            id = %request.id,
            %urgency,
            %category,
            attachments = attachments.len(),
            "classified maintenance request"
        );
        Some(request)
    }
}

/// Classify with the default `REQ` id prefix.
#[must_use]
pub fn classify(text: &str, attachments: &[Attachment]) -> Option<MaintenanceRequest> {
    RequestClassifier::default().classify(text, attachments)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap()
    }

    #[test]
    fn detect_returns_none_without_gate_keyword() {
        assert_eq!(RequestClassifier::detect("Nice weather today"), None);
    }

    #[test]
    fn detect_is_case_insensitive() {
        assert_eq!(
            RequestClassifier::detect("TOILET IS BROKEN, ASAP"),
            Some(Classification {
                urgency: Urgency::High,
                category: Category::Plumbing,
            })
        );
    }

    #[test]
    fn description_keeps_original_casing() {
        let request = RequestClassifier::default()
            .classify_at("Front DOOR lock is Broken", &[], noon())
            .expect("should classify");
        assert_eq!(request.description, "Front DOOR lock is Broken");
        assert_eq!(request.category, Category::Structural);
    }

    #[test]
    fn id_uses_configured_prefix() {
        let request = RequestClassifier::with_id_prefix("TKT")
            .classify_at("stove is broken", &[], noon())
            .expect("should classify");
        assert!(request.id.starts_with(&format!("TKT{}-", noon().timestamp_millis())));
        assert_eq!(request.category, Category::Appliances);
    }

    #[test]
    fn date_is_utc_calendar_day() {
        let late = Utc.with_ymd_and_hms(2024, 1, 16, 23, 59, 59).unwrap();
        let request = RequestClassifier::default()
            .classify_at("repair needed", &[], late)
            .expect("should classify");
        assert_eq!(request.date.to_string(), "2024-01-16");
        assert_eq!(request.tenant, None);
    }

    #[test]
    fn free_function_uses_default_prefix() {
        let request = classify("maintenance please", &[]).expect("should classify");
        assert!(request.id.starts_with("REQ"));
        assert_eq!(request.urgency, Urgency::Medium);
        assert_eq!(request.category, Category::Other);
    }
}
