//! Seed data for the landlord and tenant dashboards.

use chrono::NaiveDate;

use crate::entities::{MaintenanceRequest, WorkflowCard};
use crate::enums::{
    Category, RequestStatus, Role, Urgency, WorkflowKind, WorkflowPriority, WorkflowStatus,
};

/// Greeting shown as the first message of every chat transcript.
pub const WELCOME_MESSAGE: &str = "Hello! I'm here to help you manage maintenance requests. \
You can describe issues and I'll help create requests automatically.";

const fn day(year: i32, month: u32, date: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, date) {
        Some(day) => day,
        None => panic!("fixture date is not a calendar day"),
    }
}

// Evaluated at compile time, so an impossible date fails the build.
const JAN_08: NaiveDate = day(2024, 1, 8);
const JAN_12: NaiveDate = day(2024, 1, 12);
const JAN_15: NaiveDate = day(2024, 1, 15);
const JAN_16: NaiveDate = day(2024, 1, 16);

fn request(
    id: &str,
    tenant: Option<&str>,
    description: &str,
    urgency: Urgency,
    category: Category,
    status: RequestStatus,
    date: NaiveDate,
) -> MaintenanceRequest {
    MaintenanceRequest {
        id: id.to_string(),
        tenant: tenant.map(str::to_string),
        description: description.to_string(),
        urgency,
        category,
        status,
        date,
        attachments: None,
    }
}

/// Tickets shown on a dashboard before any chat activity, in display order.
#[must_use]
pub fn seed_requests(role: Role) -> Vec<MaintenanceRequest> {
    match role {
        Role::Landlord => landlord_requests(),
        Role::Tenant => tenant_requests(),
    }
}

fn landlord_requests() -> Vec<MaintenanceRequest> {
    vec![
        request(
            "REQ001",
            Some("Sarah Johnson"),
            "Kitchen sink is leaking underneath. Water is pooling on the cabinet floor.",
            Urgency::High,
            Category::Plumbing,
            RequestStatus::InProgress,
            JAN_15,
        ),
        request(
            "REQ002",
            Some("Mike Chen"),
            "Heating unit in bedroom making loud noises and not heating effectively.",
            Urgency::Medium,
            Category::Hvac,
            RequestStatus::Open,
            JAN_12,
        ),
        request(
            "REQ003",
            Some("Emma Wilson"),
            "Light fixture in bathroom is flickering intermittently.",
            Urgency::Low,
            Category::Electrical,
            RequestStatus::Resolved,
            JAN_08,
        ),
        request(
            "REQ004",
            Some("John Davis"),
            "Water heater not producing hot water, tenants reporting cold showers.",
            Urgency::Urgent,
            Category::Plumbing,
            RequestStatus::Open,
            JAN_16,
        ),
    ]
}

fn tenant_requests() -> Vec<MaintenanceRequest> {
    vec![
        request(
            "REQ001",
            None,
            "Kitchen sink is leaking underneath. Water is pooling on the cabinet floor.",
            Urgency::High,
            Category::Plumbing,
            RequestStatus::InProgress,
            JAN_15,
        ),
        request(
            "REQ002",
            None,
            "Heating unit in bedroom is making loud noises and not heating effectively.",
            Urgency::Medium,
            Category::Hvac,
            RequestStatus::Open,
            JAN_12,
        ),
        request(
            "REQ003",
            None,
            "Light fixture in bathroom is flickering intermittently.",
            Urgency::Low,
            Category::Electrical,
            RequestStatus::Resolved,
            JAN_08,
        ),
    ]
}

/// Cards on the landlord workflow list.
#[must_use]
pub fn seed_workflow() -> Vec<WorkflowCard> {
    vec![
        WorkflowCard {
            id: "WF001".to_string(),
            title: "Schedule Plumber for Unit 2A".to_string(),
            description: "Kitchen sink repair - contact Mike's Plumbing".to_string(),
            kind: WorkflowKind::Task,
            priority: WorkflowPriority::High,
            status: Some(WorkflowStatus::InProgress),
        },
        WorkflowCard {
            id: "WF002".to_string(),
            title: "Lease Contract - Sarah Johnson".to_string(),
            description: "Generated lease renewal contract ready for review".to_string(),
            kind: WorkflowKind::Document,
            priority: WorkflowPriority::Medium,
            status: Some(WorkflowStatus::Pending),
        },
    ]
}
