use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.top_thinking_budget, 4096);
    assert_eq!(config.gemini.body_thinking_budget, 2048);
    assert_eq!(config.screenshot.width, 1200);
    assert_eq!(config.screenshot.wait_seconds, 5);
    assert_eq!(config.analysis.aspect_width, 16);
    assert_eq!(config.analysis.aspect_height, 9);
    assert_eq!(config.analysis.spread_threshold, 3.0);
    assert_eq!(config.analysis.decluster_iterations, 5);
    assert_eq!(config.analysis.decluster_min_markers, 5);
    assert_eq!(config.analysis.max_concurrent_slices, 8);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file);
}

#[test]
fn test_partial_section_uses_field_defaults() {
    let config: Config = toml::from_str(
        r#"
        [analysis]
        decluster_iterations = 12
        "#,
    )
    .unwrap();
    assert_eq!(config.analysis.decluster_iterations, 12);
    assert_eq!(config.analysis.spread_threshold, 3.0);
    assert_eq!(config.analysis.aspect_width, 16);
}

#[test]
fn test_configured_api_key_wins() {
    let config = GeminiConfig {
        api_key: Some("configured-key".to_string()),
        ..Default::default()
    };
    assert_eq!(config.resolved_api_key().as_deref(), Some("configured-key"));
}

#[test]
fn test_log_dir_explicit() {
    let logging = LoggingConfig {
        dir: Some("/var/log/lemscope".to_string()),
        ..Default::default()
    };
    assert_eq!(logging.log_dir(), PathBuf::from("/var/log/lemscope"));
}

#[test]
fn test_log_dir_tilde_expanded() {
    let logging = LoggingConfig {
        dir: Some("~/logs".to_string()),
        ..Default::default()
    };
    assert!(!logging.log_dir().to_string_lossy().starts_with('~'));
}

#[test]
fn test_log_dir_default() {
    let dir = LoggingConfig::default().log_dir();
    assert!(dir.ends_with(".lemscope/logs"));
}

#[test]
fn test_config_serializes_to_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("[analysis]"));
    assert!(text.contains("spread_threshold"));
}
