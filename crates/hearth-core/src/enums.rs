//! Urgency, category, status, and role enums for Hearth.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `RequestStatus` carries a state machine and provides `allowed_next_states()` to
//! enforce valid transitions at the board layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// How quickly a maintenance request needs attention.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Urgency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Hint shown next to the level in the tenant request form.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Low => "Can wait a few days",
            Self::Medium => "Should be fixed soon",
            Self::High => "Needs attention this week",
            Self::Urgent => "Immediate attention needed",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Trade a maintenance request belongs to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Plumbing,
    Hvac,
    Electrical,
    Appliances,
    Structural,
    #[default]
    Other,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plumbing => "plumbing",
            Self::Hvac => "hvac",
            Self::Electrical => "electrical",
            Self::Appliances => "appliances",
            Self::Structural => "structural",
            Self::Other => "other",
        }
    }

    /// Human-facing label used on dashboards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plumbing => "Plumbing",
            Self::Hvac => "HVAC",
            Self::Electrical => "Electrical",
            Self::Appliances => "Appliances",
            Self::Structural => "Structural",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Status of a maintenance request.
///
/// ```text
/// open → in_progress → resolved
/// open → resolved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Open,
    #[serde(alias = "in-progress")]
    InProgress,
    Resolved,
}

impl RequestStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress, Self::Resolved],
            Self::InProgress => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowKind
// ---------------------------------------------------------------------------

/// What a landlord workflow card tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    Task,
    Document,
    Maintenance,
}

impl WorkflowKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Document => "document",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowPriority
// ---------------------------------------------------------------------------

/// Priority badge on a workflow card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPriority {
    Low,
    Medium,
    High,
}

impl WorkflowPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for WorkflowPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WorkflowStatus
// ---------------------------------------------------------------------------

/// Progress of a workflow card. Cards may also carry no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Pending,
    #[serde(alias = "in-progress")]
    InProgress,
    Done,
}

impl WorkflowStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MessageKind
// ---------------------------------------------------------------------------

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    User,
    System,
}

impl MessageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Which dashboard is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Landlord,
    Tenant,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Landlord => "landlord",
            Self::Tenant => "tenant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AttachmentKind
// ---------------------------------------------------------------------------

/// Coarse file kind derived from an attachment's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Document,
    File,
}

impl AttachmentKind {
    /// `image/*` is an image, anything mentioning `text` or `document` is a
    /// document, everything else is a plain file.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            Self::Image
        } else if mime_type.contains("text") || mime_type.contains("document") {
            Self::Document
        } else {
            Self::File
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::File => "file",
        }
    }
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
