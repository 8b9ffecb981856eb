//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, TimeZone, Utc};
use hearth_core::classify::Classification;
use hearth_core::entities::*;
use hearth_core::enums::*;
use hearth_core::responses::*;
use hearth_core::state::TicketStats;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn photo() -> Attachment {
    Attachment {
        id: "att-a3f8b2c1".into(),
        name: "sink.jpg".into(),
        size: 48_213,
        mime_type: "image/jpeg".into(),
        url: Some("blob:http://localhost/9f1c".into()),
    }
}

fn request() -> MaintenanceRequest {
    MaintenanceRequest {
        id: "REQ1705312800000-a3f8b2c1".into(),
        tenant: Some("Sarah Johnson".into()),
        description: "Kitchen sink is leaking underneath.".into(),
        urgency: Urgency::High,
        category: Category::Plumbing,
        status: RequestStatus::InProgress,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        attachments: Some(vec![photo()]),
    }
}

roundtrip_and_validate!(attachment_roundtrip, Attachment, photo());

roundtrip_and_validate!(
    attachment_without_url_roundtrip,
    Attachment,
    Attachment {
        url: None,
        ..photo()
    }
);

roundtrip_and_validate!(request_roundtrip, MaintenanceRequest, request());

roundtrip_and_validate!(
    request_without_optionals_roundtrip,
    MaintenanceRequest,
    MaintenanceRequest {
        tenant: None,
        attachments: None,
        status: RequestStatus::Open,
        ..request()
    }
);

roundtrip_and_validate!(
    workflow_card_roundtrip,
    WorkflowCard,
    WorkflowCard {
        id: "WF001".into(),
        title: "Schedule Plumber for Unit 2A".into(),
        description: "Kitchen sink repair".into(),
        kind: WorkflowKind::Task,
        priority: WorkflowPriority::High,
        status: Some(WorkflowStatus::InProgress),
    }
);

roundtrip_and_validate!(
    chat_message_roundtrip,
    ChatMessage,
    ChatMessage {
        id: "msg-00ff12ab".into(),
        content: "Kitchen sink is leaking".into(),
        kind: MessageKind::User,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        attachments: Some(vec![photo()]),
    }
);

roundtrip_and_validate!(
    classification_roundtrip,
    Classification,
    Classification {
        urgency: Urgency::Urgent,
        category: Category::Hvac,
    }
);

roundtrip_and_validate!(
    classify_response_roundtrip,
    ClassifyResponse,
    ClassifyResponse::from(Some(request()))
);

roundtrip_and_validate!(
    classify_response_negative_roundtrip,
    ClassifyResponse,
    ClassifyResponse::from(None)
);

roundtrip_and_validate!(
    dashboard_response_roundtrip,
    DashboardResponse,
    DashboardResponse {
        role: Role::Landlord,
        stats: TicketStats {
            total: 1,
            open: 0,
            in_progress: 1,
            resolved: 0,
        },
        requests: vec![request()],
        workflow: Some(Vec::new()),
    }
);

#[test]
fn request_date_serializes_as_plain_day() {
    let json = serde_json::to_value(request()).unwrap();
    assert_eq!(json["date"], "2024-01-15");
}

#[test]
fn absent_optionals_are_omitted_not_null() {
    let json = serde_json::to_value(MaintenanceRequest {
        tenant: None,
        attachments: None,
        ..request()
    })
    .unwrap();
    let object = json.as_object().unwrap();
    assert!(!object.contains_key("attachments"));
    assert!(!object.contains_key("tenant"));
}
