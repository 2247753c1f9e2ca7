use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Overrides `auth.base_url` when set (also read from `.env`).
pub const BASE_URL_ENV: &str = "PULSEWATCH_AUTH_BASE_URL";

/// Copy of the workspace `config.toml` for targets without a filesystem.
#[cfg(target_arch = "wasm32")]
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a `config.toml` body. Malformed input yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read and cache the configuration. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config();
        apply_env_overrides(&mut config, std::env::var(BASE_URL_ENV).ok());
        tracing::info!(
            provider = ?config.auth.provider,
            google_login = config.features.google_login,
            audit_log = config.features.audit_log,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or defaults if [`load_config`] has not run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    parse_config(EMBEDDED_CONFIG)
}

fn apply_env_overrides(config: &mut AppConfig, base_url: Option<String>) {
    if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
        config.auth.base_url = Some(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ProviderKind;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config("[features]\ngoogle_login = false\n");
        assert!(!config.features.google_login);
        assert!(config.features.audit_log);
        assert_eq!(config.auth.login_delay_ms, 1500);
    }

    #[test]
    fn malformed_file_falls_back() {
        assert_eq!(parse_config("[auth\nprovider ="), AppConfig::default());
    }

    #[test]
    fn http_section() {
        let config = parse_config(
            r#"
            [auth]
            provider = "http"
            base_url = "https://auth.example.com"
            "#,
        );
        assert_eq!(config.auth.provider, ProviderKind::Http);
        assert_eq!(config.auth.base_url.as_deref(), Some("https://auth.example.com"));
    }

    #[test]
    fn env_override_replaces_base_url() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, Some("http://localhost:8080".into()));
        assert_eq!(config.auth.base_url.as_deref(), Some("http://localhost:8080"));

        apply_env_overrides(&mut config, Some("   ".into()));
        assert_eq!(config.auth.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn app_config_before_load_is_default() {
        if CONFIG.get().is_none() {
            assert_eq!(app_config(), &AppConfig::default());
        }
    }
}
