//! Comprehensive unit tests for config.rs module

use sms_triage::config::{AppConfig, LoggingConfig, OtpConfig};

#[test]
fn test_default_config_values() {
    let config = AppConfig::default();

    assert_eq!(config.cache.directory, ".category_cache");
    assert_eq!(config.classifier.sample_size, 5);
    assert_eq!(config.search.max_results, 50);
}

#[test]
fn test_default_otp_config() {
    let config = AppConfig::default();

    assert_eq!(config.otp.max_body_chars, 1000);
    assert_eq!(config.otp.keyword_window, 40);
}

#[test]
fn test_default_logging_config() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_path, None);
    assert_eq!(config.logging.format, "text");
}

#[test]
fn test_config_validation_success() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_empty_cache_directory() {
    let mut config = AppConfig::default();
    config.cache.directory = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_zero_sample_size() {
    let mut config = AppConfig::default();
    config.classifier.sample_size = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_zero_max_body_chars() {
    let mut config = AppConfig::default();
    config.otp.max_body_chars = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_zero_keyword_window() {
    let mut config = AppConfig::default();
    config.otp.keyword_window = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_zero_max_results() {
    let mut config = AppConfig::default();
    config.search.max_results = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_invalid_log_level() {
    let mut config = AppConfig::default();
    config.logging.level = "invalid".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_valid_log_levels() {
    let valid_levels = vec!["trace", "debug", "info", "warn", "error"];
    for level in valid_levels {
        let mut config = AppConfig::default();
        config.logging.level = level.to_string();
        assert!(config.validate().is_ok(), "Failed for level: {}", level);
    }
}

#[test]
fn test_config_validation_invalid_log_format() {
    let mut config = AppConfig::default();
    config.logging.format = "xml".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_valid_log_formats() {
    let valid_formats = vec!["text", "json"];
    for format in valid_formats {
        let mut config = AppConfig::default();
        config.logging.format = format.to_string();
        assert!(config.validate().is_ok(), "Failed for format: {}", format);
    }
}

#[test]
fn test_config_validation_boundary_values() {
    let mut config = AppConfig::default();
    config.classifier.sample_size = 1;
    config.otp.max_body_chars = 1;
    config.otp.keyword_window = 1;
    config.search.max_results = 1;

    assert!(config.validate().is_ok());
}

#[test]
fn test_logging_config_with_file_path() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        file_path: Some("/var/log/sms-triage.log".to_string()),
        format: "json".to_string(),
    };
    assert!(config.file_path.is_some());
}

#[test]
fn test_otp_config_custom_limits() {
    let config = OtpConfig {
        max_body_chars: 500,
        keyword_window: 20,
    };
    assert_eq!(config.max_body_chars, 500);
    assert_eq!(config.keyword_window, 20);
}

#[test]
fn test_config_debug_format() {
    let config = AppConfig::default();
    let debug_str = format!("{:?}", config);
    assert!(debug_str.contains("AppConfig"));
}

#[test]
fn test_config_clone() {
    let config = AppConfig::default();
    let cloned = config.clone();
    assert_eq!(config.cache.directory, cloned.cache.directory);
    assert_eq!(config.logging.level, cloned.logging.level);
}
