use serde::{Deserialize, Serialize};

/// Feature flags controlling optional parts of the UI and session layer.
///
/// Loaded from `config.toml`; every field has a serde default so a missing
/// or partial file still yields a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the "Sign in with Google" path on the login page.
    #[serde(default = "default_true")]
    pub google_login: bool,
    /// Report route-guard denials to the audit log.
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            google_login: true,
            audit_log: true,
        }
    }
}

/// Which authentication backend the session layer talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Canned per-role identities after a fixed delay.
    #[default]
    Mock,
    /// JSON over HTTP against `auth.base_url`.
    Http,
}

/// `[auth]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    #[serde(default)]
    pub provider: ProviderKind,
    /// Simulated round-trip time of the mock provider.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            login_delay_ms: default_login_delay_ms(),
            base_url: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub auth: AuthSettings,
}

fn default_true() -> bool {
    true
}

fn default_login_delay_ms() -> u64 {
    1500
}
