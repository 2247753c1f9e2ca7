use pretty_assertions::assert_eq;
use session::config::parse_config;
use session::provider_from_settings;
use shared_types::ProviderKind;

#[test]
fn test_workspace_config_parses() {
    let config = parse_config(include_str!("../../../config.toml"));
    assert_eq!(config.auth.provider, ProviderKind::Mock);
    assert_eq!(config.auth.login_delay_ms, 1500);
    assert!(config.features.google_login);
    assert!(config.features.audit_log);
}

#[test]
fn test_default_config_builds_mock_provider() {
    let config = parse_config("");
    assert_eq!(provider_from_settings(&config.auth).name(), "mock");
}
