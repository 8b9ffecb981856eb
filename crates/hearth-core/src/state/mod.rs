//! Owned application state for the dashboards.
//!
//! Ticket and workflow boards are plain values: every mutation consumes the
//! board and returns the next one, or an error that leaves the caller's copy
//! untouched if it kept one. The chat session is the exception and mutates in
//! place, since a transcript only ever grows.

mod chat;
mod draft;
mod tickets;
mod workflow;

pub use chat::{ChatOutcome, ChatSession};
pub use draft::RequestDraft;
pub use tickets::{TicketBoard, TicketFilter, TicketStats};
pub use workflow::WorkflowBoard;
