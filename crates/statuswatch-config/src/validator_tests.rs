use super::*;
use std::path::PathBuf;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_empty_server_name() {
    let mut config = Config::default();
    config.server.name = "  ".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "server.name"));
}

#[test]
fn test_validate_invalid_status_url() {
    let mut config = Config::default();
    config.monitor.status_url = "not a url".to_string();

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "monitor.status_url"));
}

#[test]
fn test_validate_unsupported_scheme() {
    let mut config = Config::default();
    config.monitor.status_url = "ftp://status.example.com/summary.json".to_string();

    let result = ConfigValidator::validate(&config);
    let err = result
        .errors
        .iter()
        .find(|e| e.path == "monitor.status_url")
        .unwrap();
    assert!(err.message.contains("ftp"));
}

#[test]
fn test_validate_default_interval_below_minimum() {
    let mut config = Config::default();
    config.monitor.default_interval_secs = 5;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "monitor.default_interval_secs"));
}

#[test]
fn test_validate_zero_values() {
    let mut config = Config::default();
    config.monitor.min_interval_secs = 0;
    config.monitor.retry_delay_secs = 0;
    config.monitor.request_timeout_secs = 0;

    let result = ConfigValidator::validate(&config);
    for path in [
        "monitor.min_interval_secs",
        "monitor.retry_delay_secs",
        "monitor.request_timeout_secs",
    ] {
        assert!(result.errors.iter().any(|e| e.path == path), "missing {}", path);
    }
}

#[test]
fn test_validate_long_timeout_warning() {
    let mut config = Config::default();
    config.monitor.request_timeout_secs = 600;

    let result = ConfigValidator::validate(&config);
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "monitor.request_timeout_secs"));
}

#[test]
fn test_validate_log_files_zero_with_dir() {
    let mut config = Config::default();
    config.logging.dir = Some(PathBuf::from("/tmp/statuswatch"));
    config.logging.max_log_files = 0;

    let result = ConfigValidator::validate(&config);
    assert!(result.errors.iter().any(|e| e.path == "logging.max_log_files"));
}

#[test]
fn test_into_result_ok() {
    let config = Config::default();
    let warnings = ConfigValidator::validate(&config).into_result().unwrap();
    assert!(warnings.is_empty());
}

#[test]
fn test_into_result_error() {
    let mut config = Config::default();
    config.monitor.retry_delay_secs = 0;

    let err = ConfigValidator::validate(&config).into_result().unwrap_err();
    assert!(err.to_string().contains("monitor.retry_delay_secs"));
}
