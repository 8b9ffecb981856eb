//! Central schema registry for all Hearth types.
//!
//! The `SchemaRegistry` builds JSON Schemas from hearth-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Hearth system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and response schemas.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types ---
        register!(
            schemas,
            "maintenance_request",
            hearth_core::entities::MaintenanceRequest
        );
        register!(schemas, "attachment", hearth_core::entities::Attachment);
        register!(schemas, "workflow_card", hearth_core::entities::WorkflowCard);
        register!(schemas, "chat_message", hearth_core::entities::ChatMessage);

        // --- Classifier and board outputs ---
        register!(
            schemas,
            "classification",
            hearth_core::classify::Classification
        );
        register!(schemas, "chat_outcome", hearth_core::state::ChatOutcome);
        register!(schemas, "ticket_stats", hearth_core::state::TicketStats);

        // --- CLI response types ---
        register!(
            schemas,
            "classify_response",
            hearth_core::responses::ClassifyResponse
        );
        register!(
            schemas,
            "dashboard_response",
            hearth_core::responses::DashboardResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    ///
    /// Hyphenated names are accepted (`workflow-card` finds `workflow_card`),
    /// as are the short names `request`, `card` and `message`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.entry(name).map(|(_, schema)| schema)
    }

    /// Like [`Self::get`], but an unknown name is an error listing what exists.
    ///
    /// # Errors
    ///
    /// `SchemaError::UnknownSchema` if no schema answers to `name`.
    pub fn require(&self, name: &str) -> Result<&serde_json::Value, SchemaError> {
        self.get(name).ok_or_else(|| SchemaError::UnknownSchema {
            name: name.to_string(),
            available: self.list(),
        })
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// `SchemaError::UnknownSchema` if the name is unknown,
    /// `SchemaError::Invalid` if the value breaks the schema.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let (schema_name, schema) = self.entry(name).ok_or_else(|| SchemaError::UnknownSchema {
            name: name.to_string(),
            available: self.list(),
        })?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile {
                schema: schema_name,
                reason: e.to_string(),
            })?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    e.to_string()
                } else {
                    format!("{path}: {e}")
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Invalid {
                schema: schema_name,
                errors,
            })
        }
    }

    fn entry(&self, name: &str) -> Option<(&'static str, &serde_json::Value)> {
        let key = match name.replace('-', "_").as_str() {
            "request" => "maintenance_request".to_string(),
            "card" => "workflow_card".to_string(),
            "message" => "chat_message".to_string(),
            other => other.to_string(),
        };
        self.schemas
            .get_key_value(key.as_str())
            .map(|(name, schema)| (*name, schema))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use hearth_core::RequestClassifier;
    use pretty_assertions::assert_eq;

    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 4 entities + 3 classifier/board outputs + 2 responses
        assert_eq!(registry().list().len(), 9);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn hyphenated_lookup() {
        let reg = registry();
        assert!(reg.get("workflow-card").is_some());
        assert!(reg.get("maintenance_request").is_some());
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn classifier_output_validates() {
        let now = Utc.with_ymd_and_hms(2024, 1, 16, 12, 0, 0).unwrap();
        let request = RequestClassifier::default()
            .classify_at("Kitchen sink is leaking", &[], now)
            .expect("request");
        let json = serde_json::to_value(&request).unwrap();
        assert!(registry().validate("maintenance_request", &json).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let invalid = serde_json::json!({
            "id": "REQ1",
            "description": "Sink",
            "urgency": "medium",
            "category": "gardening",
            "status": "open",
            "date": "2024-01-16"
        });
        let result = registry().validate("maintenance_request", &invalid);
        assert!(matches!(
            result,
            Err(SchemaError::Invalid { schema: "maintenance_request", .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_required_field() {
        let invalid = serde_json::json!({
            "id": "REQ1",
            // "description" is missing
            "urgency": "medium",
            "category": "plumbing",
            "status": "open",
            "date": "2024-01-16"
        });
        if let Err(SchemaError::Invalid { errors, .. }) =
            registry().validate("request", &invalid)
        {
            assert!(errors.iter().any(|error| error.contains("description")));
        } else {
            panic!("Expected Invalid");
        }
    }

    #[test]
    fn validate_nonexistent_schema_is_unknown() {
        let result = registry().validate("bogus", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::UnknownSchema { .. })));
    }

    #[test]
    fn short_names_resolve() {
        let reg = registry();
        for name in ["request", "attachment", "workflow-card", "chat-message", "card", "message"] {
            assert!(reg.get(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn require_lists_available_schemas() {
        let err = registry().require("invoice").expect_err("not registered");
        let message = err.to_string();
        assert!(message.starts_with("unknown schema type 'invoice'. Available: attachment, "));
        assert!(message.contains("workflow_card"));
    }
}
