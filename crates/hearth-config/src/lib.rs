//! # hearth-config
//!
//! Layered configuration loading for Hearth using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HEARTH_*` prefix, `__` as separator)
//! 2. Project-level `.hearth/config.toml`
//! 3. User-level `~/.config/hearth/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HEARTH_GENERAL__DEFAULT_ROLE` -> `general.default_role`,
//! `HEARTH_REQUESTS__ID_PREFIX` -> `requests.id_prefix`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hearth_config::HearthConfig;
//!
//! let config = HearthConfig::load_with_dotenv().expect("config");
//! println!("default dashboard: {}", config.general.default_role);
//! ```

mod chat;
mod error;
mod general;
mod requests;

pub use chat::ChatConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};
pub use requests::RequestsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HearthConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub requests: RequestsConfig,
}

impl HearthConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse and
    /// `ConfigError::InvalidIdPrefix` or `ConfigError::UnknownFormat` if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.general.validate()?;
        config.requests.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".hearth/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HEARTH_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hearth").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
