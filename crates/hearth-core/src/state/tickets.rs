use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MaintenanceRequest;
use crate::enums::{Category, RequestStatus, Role, Urgency};
use crate::errors::CoreError;
use crate::fixtures;

/// Counts shown in the dashboard stat cards.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Optional criteria for narrowing a ticket list. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub status: Option<RequestStatus>,
    pub urgency: Option<Urgency>,
    pub category: Option<Category>,
}

impl TicketFilter {
    #[must_use]
    pub fn matches(&self, request: &MaintenanceRequest) -> bool {
        self.status.is_none_or(|status| request.status == status)
            && self.urgency.is_none_or(|urgency| request.urgency == urgency)
            && self.category.is_none_or(|category| request.category == category)
    }
}

/// Ordered list of maintenance tickets, front of the list first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketBoard {
    requests: Vec<MaintenanceRequest>,
}

impl TicketBoard {
    /// Board pre-filled with the fixtures for `role`.
    #[must_use]
    pub fn seeded(role: Role) -> Self {
        Self {
            requests: fixtures::seed_requests(role),
        }
    }

    #[must_use]
    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MaintenanceRequest> {
        self.requests.iter().find(|request| request.id == id)
    }

    /// Put a newly created request at the front of the list.
    #[must_use]
    pub fn with_request(mut self, request: MaintenanceRequest) -> Self {
        tracing::info!(id = %request.id, "ticket added to board");
        self.requests.insert(0, request);
        self
    }

    /// Move ticket `id` to `next`, enforcing the status state machine.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no ticket has `id`, `CoreError::InvalidTransition`
    /// if the current status cannot move to `next`.
    pub fn transition(mut self, id: &str, next: RequestStatus) -> Result<Self, CoreError> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| CoreError::not_found("request", id))?;

        if !request.status.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "request".to_string(),
                id: id.to_string(),
                from: request.status.to_string(),
                to: next.to_string(),
            });
        }

        tracing::info!(%id, from = %request.status, to = %next, "ticket status changed");
        request.status = next;
        Ok(self)
    }

    /// Shorthand for `transition(id, RequestStatus::Resolved)`.
    ///
    /// # Errors
    ///
    /// Same as [`TicketBoard::transition`].
    pub fn mark_resolved(self, id: &str) -> Result<Self, CoreError> {
        self.transition(id, RequestStatus::Resolved)
    }

    #[must_use]
    pub fn stats(&self) -> TicketStats {
        self.requests
            .iter()
            .fold(TicketStats::default(), |mut stats, request| {
                stats.total += 1;
                match request.status {
                    RequestStatus::Open => stats.open += 1,
                    RequestStatus::InProgress => stats.in_progress += 1,
                    RequestStatus::Resolved => stats.resolved += 1,
                }
                stats
            })
    }

    #[must_use]
    pub fn filter(&self, filter: &TicketFilter) -> Vec<&MaintenanceRequest> {
        self.requests
            .iter()
            .filter(|request| filter.matches(request))
            .collect()
    }
}
