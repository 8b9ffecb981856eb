use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown schema type '{name}'. Available: {}", available.join(", "))]
    UnknownSchema {
        name: String,
        available: Vec<&'static str>,
    },

    /// A document broke one or more rules of the named schema.
    #[error("{schema} is invalid: {}", errors.join("; "))]
    Invalid {
        schema: &'static str,
        errors: Vec<String>,
    },

    #[error("schema '{schema}' does not compile: {reason}")]
    Compile { schema: &'static str, reason: String },
}
