//! Errors raised while loading or validating [`crate::HearthConfig`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse, or a value had the wrong type.
    #[error("failed to load hearth config: {0}")]
    Figment(#[from] figment::Error),

    /// `requests.id_prefix` would run into the timestamp of generated ids.
    #[error("requests.id_prefix '{prefix}' must be one or more ASCII letters")]
    InvalidIdPrefix { prefix: String },

    /// `general.default_format` names no output format.
    #[error("general.default_format '{format}' must be one of json, table, raw")]
    UnknownFormat { format: String },
}
