use figment::Jail;
use hearth_config::HearthConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("HEARTH_CHAT__PLACEHOLDER", "Type here");
        jail.set_env("HEARTH_GENERAL__DEFAULT_LIMIT", "7");

        let config = HearthConfig::load().expect("config loads");
        assert_eq!(config.chat.placeholder, "Type here");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn unrelated_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OTHERAPP_GENERAL__DEFAULT_LIMIT", "99");

        let config = HearthConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}
