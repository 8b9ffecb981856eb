//! # hearth-schema
//!
//! JSON Schema generation, validation, and registry for Hearth.
//!
//! Entity types are defined in `hearth-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry, validation, and
//! export layer behind `hearth schema`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
