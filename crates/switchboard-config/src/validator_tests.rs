use super::*;
use crate::schema::ProviderConfig;

#[test]
fn test_validate_default_config() {
    let result = ConfigValidator::validate(&Config::default());
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_invalid_port() {
    let mut config = Config::default();
    config.server.port = 0;

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.port"));
}

#[test]
fn test_validate_empty_host() {
    let mut config = Config::default();
    config.server.host.clear();
    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "server.host"));
}

#[test]
fn test_validate_zero_window() {
    let mut config = Config::default();
    config.proxy.window_seconds = 0;
    config.proxy.sweep_interval_seconds = 0;

    let result = ConfigValidator::validate(&config);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_unknown_priority_provider() {
    let mut config = Config::default();
    config.orchestrator.cloud_priority.push("gemini".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors[0].message.contains("gemini"));
    assert_eq!(result.errors[0].path, "orchestrator.cloud_priority");
}

#[test]
fn test_validate_provider_in_both_lists_warns() {
    let mut config = Config::default();
    config.orchestrator.local_priority.push("openai".to_string());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.message.contains("both")));
}

#[test]
fn test_validate_disabled_provider_in_priority_warns() {
    let mut config = Config::default();
    config.providers.insert(
        "groq".to_string(),
        ProviderConfig {
            enabled: false,
            ..Default::default()
        },
    );

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.message.contains("disabled")));
}

#[test]
fn test_validate_zero_timeout() {
    let mut config = Config::default();
    config.providers.insert(
        "ollama".to_string(),
        ProviderConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        },
    );

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "providers.ollama.timeout_seconds"));
}

#[test]
fn test_validate_bad_base_url() {
    let mut config = Config::default();
    config.providers.insert(
        "vllm".to_string(),
        ProviderConfig {
            base_url: Some("localhost:8000".to_string()),
            ..Default::default()
        },
    );

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "providers.vllm.base_url"));
}

#[test]
fn test_validate_unknown_provider_section_warns() {
    let mut config = Config::default();
    config
        .providers
        .insert("cohere".to_string(), ProviderConfig::default());

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn test_error_display() {
    let err = ValidationError::new("server.port", "Port cannot be 0");
    assert_eq!(err.to_string(), "server.port: Port cannot be 0");
}

#[test]
fn test_into_result_reports_first_error_as_invalid_value() {
    let mut config = Config::default();
    config.server.port = 0;
    config.proxy.window_seconds = 0;

    match ConfigValidator::validate(&config).into_result() {
        Err(ConfigError::InvalidValue { field, message }) => {
            assert_eq!(field, "server.port");
            assert!(!message.is_empty());
        }
        other => panic!("Expected InvalidValue, got {:?}", other),
    }
}

#[test]
fn test_into_result_passes_warnings_through() {
    let mut config = Config::default();
    config.orchestrator.local_priority.push("openai".to_string());

    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert!(!warnings.is_empty());
}
