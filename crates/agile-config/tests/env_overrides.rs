use agile_config::AgileConfig;
use figment::Jail;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("AGILE_API__BASE_URL", "http://127.0.0.1:9000");
        jail.set_env("AGILE_GENERAL__DEFAULT_PROJECT", "42");

        let config = AgileConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.general.default_project, Some(42));
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".agile"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".agile/config.toml",
            r#"
[api]
session_cookie = "JSESSIONID=from-toml"
"#,
        )?;
        jail.set_env("AGILE_API__SESSION_COOKIE", "JSESSIONID=from-env");

        let config = AgileConfig::load().expect("config loads");
        assert_eq!(config.api.session_cookie, "JSESSIONID=from-env");
        Ok(())
    });
}
