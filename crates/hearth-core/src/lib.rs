//! # hearth-core
//!
//! Core types, request classification, and board state for Hearth.
//!
//! This crate provides the foundational types shared across all Hearth crates:
//! - Entity structs for maintenance requests, attachments, workflow cards, and chat messages
//! - Urgency, category, and status enums (with the request status state machine)
//! - Time-based ID generation
//! - The keyword classifier that turns free text into a maintenance request
//! - Owned board state (tickets, workflow, chat) with pure transition functions
//! - Seed fixtures for the landlord and tenant dashboards
//! - CLI response types

pub mod classify;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fixtures;
pub mod ids;
pub mod responses;
pub mod state;

pub use classify::{RequestClassifier, classify};
pub use errors::CoreError;
