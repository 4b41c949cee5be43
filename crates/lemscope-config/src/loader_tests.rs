use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_empty_config() {
    let config = ConfigLoader::load_str("").unwrap();
    assert_eq!(config.screenshot.width, 1200);
    assert_eq!(config.analysis.decluster_iterations, 5);
}

#[test]
fn test_load_full_config() {
    let content = r#"
        [gemini]
        api_key = "test-key"
        model = "gemini-2.5-pro"
        top_thinking_budget = 8192

        [screenshot]
        service_url = "http://localhost:9000"
        width = 1440

        [analysis]
        spread_threshold = 4.5
        decluster_iterations = 10
        decluster_min_markers = 0

        [logging]
        level = "debug"
        file = true
        dir = "/tmp/lemscope-logs"
    "#;
    let config = ConfigLoader::load_str(content).unwrap();
    assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.top_thinking_budget, 8192);
    assert_eq!(config.gemini.body_thinking_budget, 2048);
    assert_eq!(config.screenshot.service_url, "http://localhost:9000");
    assert_eq!(config.screenshot.width, 1440);
    assert_eq!(config.analysis.spread_threshold, 4.5);
    assert_eq!(config.analysis.decluster_iterations, 10);
    assert_eq!(config.analysis.decluster_min_markers, 0);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[screenshot]").unwrap();
    writeln!(file, "width = 1024").unwrap();

    let config = ConfigLoader::load(file.path()).unwrap();
    assert_eq!(config.screenshot.width, 1024);
}

#[test]
fn test_load_nonexistent_file() {
    let result = ConfigLoader::load(Path::new("/nonexistent/path/lemscope.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_load_or_default_missing_file() {
    let config = ConfigLoader::load_or_default(Path::new("/nonexistent/lemscope.toml")).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
}

#[test]
fn test_load_or_default_propagates_parse_errors() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[analysis").unwrap();
    assert!(ConfigLoader::load_or_default(file.path()).is_err());
}

#[test]
fn test_load_invalid_toml() {
    let result = ConfigLoader::load_str("invalid = [unclosed");
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_load_wrong_type() {
    let result = ConfigLoader::load_str("[analysis]\ndecluster_iterations = \"many\"");
    assert!(result.is_err());
}

#[test]
fn test_expand_env_vars() {
    // SAFETY: This test runs in isolation and sets a unique test-only env var
    unsafe {
        std::env::set_var("LEMSCOPE_TEST_CONFIG_VAR", "test_value");
    }
    let content = "value = \"${LEMSCOPE_TEST_CONFIG_VAR}\"";
    let expanded = ConfigLoader::expand_env_vars(content).unwrap();
    assert!(expanded.contains("test_value"));
    unsafe {
        std::env::remove_var("LEMSCOPE_TEST_CONFIG_VAR");
    }
}

#[test]
fn test_expand_env_vars_in_api_key() {
    // SAFETY: This test runs in isolation and sets a unique test-only env var
    unsafe {
        std::env::set_var("LEMSCOPE_TEST_GEMINI_KEY", "from-env");
    }
    let config = ConfigLoader::load_str("[gemini]\napi_key = \"${LEMSCOPE_TEST_GEMINI_KEY}\"").unwrap();
    assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));
    unsafe {
        std::env::remove_var("LEMSCOPE_TEST_GEMINI_KEY");
    }
}

#[test]
fn test_expand_env_vars_not_set() {
    let content = "value = \"${NONEXISTENT_LEMSCOPE_VAR_12345}\"";
    let result = ConfigLoader::expand_env_vars(content);
    assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
}

#[test]
fn test_expand_env_vars_no_vars() {
    let content = "value = \"no variables here\"";
    let expanded = ConfigLoader::expand_env_vars(content).unwrap();
    assert_eq!(expanded, content);
}

#[test]
fn test_expand_path_with_tilde() {
    let expanded = ConfigLoader::expand_path("~/test");
    assert!(!expanded.starts_with('~'));
    assert!(expanded.ends_with("/test"));
}

#[test]
fn test_expand_path_no_tilde() {
    let path = "/usr/local/bin";
    assert_eq!(ConfigLoader::expand_path(path), path);
}
