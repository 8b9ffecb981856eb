//! Maintenance request configuration.

use hearth_core::ids::{self, PREFIX_REQUEST};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_id_prefix() -> String {
    PREFIX_REQUEST.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestsConfig {
    /// Prefix of generated request ids (`REQ1705312800000-a3f8b2c1`).
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

impl Default for RequestsConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

impl RequestsConfig {
    /// # Errors
    ///
    /// `ConfigError::InvalidIdPrefix` when the prefix is empty or contains
    /// anything but ASCII letters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if ids::is_valid_prefix(&self.id_prefix) {
            Ok(())
        } else {
            Err(ConfigError::InvalidIdPrefix {
                prefix: self.id_prefix.clone(),
            })
        }
    }
}
