use agile_config::AgileConfig;

/// Emit warnings for config that will make every request fail or be ignored.
pub fn warn_unconfigured(config: &AgileConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AgileConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() {
        if has_single_underscore_key(&env_keys, "AGILE_API_") {
            warnings.push(
                "API config appears default while AGILE_API_* env vars exist. Use double underscores (example: AGILE_API__SESSION_COOKIE)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No session cookie configured; the backend will reject most requests. Set api.session_cookie or AGILE_API__SESSION_COOKIE."
                    .to_string(),
            );
        }
    }

    if config.general.default_project.is_none()
        && has_single_underscore_key(&env_keys, "AGILE_GENERAL_")
    {
        warnings.push(
            "General config appears default while AGILE_GENERAL_* env vars exist. Use double underscores (example: AGILE_GENERAL__DEFAULT_PROJECT)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), String::from("x")))
            .collect()
    }

    #[test]
    fn missing_cookie_is_reported() {
        let warnings = collect_unconfigured_warnings(&AgileConfig::default(), env(&[]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("session cookie"));
    }

    #[test]
    fn single_underscore_keys_are_flagged() {
        let warnings = collect_unconfigured_warnings(
            &AgileConfig::default(),
            env(&["AGILE_API_SESSION_COOKIE", "AGILE_GENERAL_DEFAULT_PROJECT"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("AGILE_API__SESSION_COOKIE"));
        assert!(warnings[1].contains("AGILE_GENERAL__DEFAULT_PROJECT"));
    }

    #[test]
    fn configured_cookie_is_quiet() {
        let mut config = AgileConfig::default();
        config.api.session_cookie = "JSESSIONID=abc".into();
        config.general.default_project = Some(3);
        assert!(collect_unconfigured_warnings(&config, env(&["AGILE_API__BASE_URL"])).is_empty());
    }
}
