use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::WorkflowCard;
use crate::enums::{WorkflowKind, WorkflowPriority, WorkflowStatus};
use crate::errors::CoreError;
use crate::{fixtures, ids};

/// The landlord's reorderable workflow list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowBoard {
    cards: Vec<WorkflowCard>,
}

impl WorkflowBoard {
    #[must_use]
    pub const fn new(cards: Vec<WorkflowCard>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn seeded() -> Self {
        Self::new(fixtures::seed_workflow())
    }

    #[must_use]
    pub fn cards(&self) -> &[WorkflowCard] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<WorkflowCard> {
        self.cards
    }

    /// Take the card at `from` out of the list and insert it at `to`.
    ///
    /// `to` is an index into the list after removal, matching a drop onto the
    /// card currently shown at that position. `from == to` leaves the list as is.
    ///
    /// # Errors
    ///
    /// `CoreError::Validation` if either index is past the end of the list.
    pub fn reorder(mut self, from: usize, to: usize) -> Result<Self, CoreError> {
        let len = self.cards.len();
        if from >= len || to >= len {
            return Err(CoreError::Validation(format!(
                "cannot move card from position {from} to {to}: list has {len} cards"
            )));
        }
        if from == to {
            return Ok(self);
        }

        let moved = self.cards.remove(from);
        tracing::info!(id = %moved.id, from, to, "workflow card moved");
        self.cards.insert(to, moved);
        Ok(self)
    }

    /// Mark card `id` as done. Already-done cards stay done.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no card has `id`.
    pub fn mark_done(mut self, id: &str) -> Result<Self, CoreError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or_else(|| CoreError::not_found("workflow_card", id))?;
        card.status = Some(WorkflowStatus::Done);
        tracing::info!(%id, "workflow card done");
        Ok(self)
    }

    /// Drop card `id` from the list.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no card has `id`.
    pub fn remove(mut self, id: &str) -> Result<Self, CoreError> {
        let position = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or_else(|| CoreError::not_found("workflow_card", id))?;
        self.cards.remove(position);
        tracing::info!(%id, "workflow card removed");
        Ok(self)
    }

    /// Append a freshly generated lease contract document.
    #[must_use]
    pub fn with_generated_contract(mut self, now: DateTime<Utc>) -> Self {
        let card = WorkflowCard {
            id: ids::time_based_id(ids::PREFIX_WORKFLOW, now),
            title: "New Lease Contract Generated".to_string(),
            description: "Standard lease agreement ready for download".to_string(),
            kind: WorkflowKind::Document,
            priority: WorkflowPriority::Medium,
            status: None,
        };
        tracing::info!(id = %card.id, "lease contract added to workflow");
        self.cards.push(card);
        self
    }
}
