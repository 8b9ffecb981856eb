pub mod chat;
pub mod classify;
pub mod dashboard;
pub mod dispatch;
pub mod request;
pub mod schema;
pub mod shared;
pub mod workflow;
