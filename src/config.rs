//! Configuration management

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::classifier::DEFAULT_SAMPLE_SIZE;
use crate::error::{Result, TriageError};
use crate::otp::{DEFAULT_KEYWORD_WINDOW, DEFAULT_MAX_BODY_CHARS};

/// Application configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Classification cache settings
    pub cache: CacheConfig,
    /// Classifier settings
    pub classifier: ClassifierConfig,
    /// OTP extraction settings
    pub otp: OtpConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Classification cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory the sled cache lives in
    pub directory: String,
}

/// Classifier settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Recent bodies sampled per thread for content inference
    pub sample_size: usize,
}

/// OTP extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Bodies longer than this many characters are skipped
    pub max_body_chars: usize,
    /// Maximum character gap between token and keyword
    pub keyword_window: usize,
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results surfaced to the caller
    pub max_results: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Optional log file path; console-only when absent
    pub file_path: Option<String>,
    /// Log format ("text" or "json")
    pub format: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            directory: ".category_cache".to_string(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            max_body_chars: DEFAULT_MAX_BODY_CHARS,
            keyword_window: DEFAULT_KEYWORD_WINDOW,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 50 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(File::with_name("config").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("SMS_TRIAGE").separator("__"))
            .build()
            .map_err(|e| TriageError::InvalidConfig(format!("Failed to load configuration: {e}")))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(|e| TriageError::InvalidConfig(format!("Failed to deserialize configuration: {e}")))?;

        // Validate configuration
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.cache.directory.trim().is_empty() {
            return Err(TriageError::InvalidConfig(
                "cache directory cannot be empty".to_string(),
            ));
        }

        if self.classifier.sample_size == 0 {
            return Err(TriageError::InvalidConfig(
                "sample_size must be greater than 0".to_string(),
            ));
        }

        if self.otp.max_body_chars == 0 {
            return Err(TriageError::InvalidConfig(
                "max_body_chars must be greater than 0".to_string(),
            ));
        }
        if self.otp.keyword_window == 0 {
            return Err(TriageError::InvalidConfig(
                "keyword_window must be greater than 0".to_string(),
            ));
        }

        if self.search.max_results == 0 {
            return Err(TriageError::InvalidConfig(
                "max_results must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(TriageError::InvalidConfig(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                self.logging.level
            )));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(TriageError::InvalidConfig(format!(
                "Invalid log format: {}. Must be one of: {valid_formats:?}",
                self.logging.format
            )));
        }

        Ok(())
    }
}
