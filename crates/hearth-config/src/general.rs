//! General application configuration.

use hearth_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Values accepted by `--format`.
pub const OUTPUT_FORMATS: &[&str] = &["json", "table", "raw"];

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_role() -> Role {
    Role::Tenant
}

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Dashboard shown when `--role` is not given.
    #[serde(default = "default_role")]
    pub default_role: Role,

    /// Output format used when `--format` is not given (json, table, raw).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Default result limit for dashboard listings.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            default_format: default_format(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// `ConfigError::UnknownFormat` when `default_format` is not one of
    /// [`OUTPUT_FORMATS`] (case-insensitive).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let format = self.default_format.to_ascii_lowercase();
        if OUTPUT_FORMATS.contains(&format.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::UnknownFormat {
                format: self.default_format.clone(),
            })
        }
    }
}
