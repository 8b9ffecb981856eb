//! Entity structs for all Hearth domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod attachment;
mod message;
mod request;
mod workflow;

pub use attachment::Attachment;
pub use message::ChatMessage;
pub use request::MaintenanceRequest;
pub use workflow::WorkflowCard;
