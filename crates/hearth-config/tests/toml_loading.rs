//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hearth_config::{ConfigError, HearthConfig};
use hearth_core::enums::Role;
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_role = "landlord"
default_format = "table"
default_limit = 5

[chat]
welcome_message = "Hi there"
placeholder = "What's broken?"

[requests]
id_prefix = "TKT"
"#,
        )?;

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_role, Role::Landlord);
        assert_eq!(config.general.default_format, "table");
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.chat.welcome_message, "Hi there");
        assert_eq!(config.chat.placeholder, "What's broken?");
        assert_eq!(config.requests.id_prefix, "TKT");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 3
"#,
        )?;

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 3);
        assert_eq!(config.general.default_role, Role::Tenant);
        assert_eq!(config.requests.id_prefix, "REQ");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".hearth")?;
        jail.create_file(
            ".hearth/config.toml",
            r#"
[requests]
id_prefix = "UNIT"
"#,
        )?;

        let config = HearthConfig::load().expect("config loads");
        assert_eq!(config.requests.id_prefix, "UNIT");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_role = "tenant"
"#,
        )?;
        jail.set_env("HEARTH_GENERAL__DEFAULT_ROLE", "landlord");

        let config: HearthConfig = Figment::from(Serialized::defaults(HearthConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HEARTH_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_role, Role::Landlord);
        Ok(())
    });
}

#[test]
fn invalid_prefix_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTH_REQUESTS__ID_PREFIX", "REQ-");

        let err = HearthConfig::load().expect_err("prefix must be letters");
        assert!(matches!(err, ConfigError::InvalidIdPrefix { ref prefix } if prefix == "REQ-"));
        Ok(())
    });
}

#[test]
fn unknown_default_format_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
            [general]
            default_format = "yaml"
            "#,
        )?;

        let figment = HearthConfig::figment().merge(Toml::file("config.toml"));
        let err = HearthConfig::from_figment(&figment).expect_err("yaml is not a format");
        assert!(matches!(err, ConfigError::UnknownFormat { .. }));
        Ok(())
    });
}

#[test]
fn unknown_role_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTH_GENERAL__DEFAULT_ROLE", "janitor");

        let err = HearthConfig::load().expect_err("janitor is not a role");
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
