// src/config.rs

//! Application configuration structures.
//!
//! Configuration is loaded from a TOML file for CLI runs and from environment
//! variables in the Lambda environment. Everything has a default so a bare
//! deployment of the reference watcher works without a config file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Filing API and registrant settings
    #[serde(default)]
    pub watch: WatchConfig,

    /// Archive bucket settings
    #[serde(default)]
    pub archive: ArchiveConfig,

    /// Notification email settings
    #[serde(default)]
    pub email: EmailConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Build configuration from environment variables over defaults.
    ///
    /// Used in the Lambda environment where no config file is bundled.
    /// Recognized variables: `REGISTRANT_ID`, `FARA_API_BASE`,
    /// `HTTP_TIMEOUT_SECS`, `S3_BUCKET`, `AWS_REGION`, `SES_SENDER`,
    /// `EMAIL_RECIPIENTS` (comma-separated).
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(id) = std::env::var("REGISTRANT_ID") {
            if let Ok(id) = id.parse() {
                config.watch.registrant_id = id;
            }
        }

        if let Ok(base) = std::env::var("FARA_API_BASE") {
            config.watch.api_base = base;
        }

        if let Ok(timeout) = std::env::var("HTTP_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                config.watch.timeout_secs = secs;
            }
        }

        if let Ok(bucket) = std::env::var("S3_BUCKET") {
            config.archive.bucket = bucket;
        }

        if let Ok(region) = std::env::var("AWS_REGION") {
            config.archive.region = region;
        }

        if let Ok(sender) = std::env::var("SES_SENDER") {
            config.email.sender = sender;
        }

        if let Ok(recipients) = std::env::var("EMAIL_RECIPIENTS") {
            let recipients: Vec<String> = recipients
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect();
            if !recipients.is_empty() {
                config.email.recipients = recipients;
            }
        }

        config
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.watch.registrant_id == 0 {
            return Err(AppError::config("watch.registrant_id must be > 0"));
        }
        if self.watch.api_base.trim().is_empty() {
            return Err(AppError::config("watch.api_base is empty"));
        }
        if self.watch.timeout_secs == 0 {
            return Err(AppError::config("watch.timeout_secs must be > 0"));
        }
        if self.archive.bucket.trim().is_empty() {
            return Err(AppError::config("archive.bucket is empty"));
        }
        if self.email.sender.trim().is_empty() {
            return Err(AppError::config("email.sender is empty"));
        }
        if self.email.recipients.is_empty() {
            return Err(AppError::config("No email recipients defined"));
        }
        Ok(())
    }
}

/// Filing API and registrant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// FARA registration number of the watched registrant
    #[serde(default = "defaults::registrant_id")]
    pub registrant_id: u64,

    /// Base URL of the FARA eFile API
    #[serde(default = "defaults::api_base")]
    pub api_base: String,

    /// Document type filter passed to the filing API
    #[serde(default = "defaults::document_type")]
    pub document_type: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            registrant_id: defaults::registrant_id(),
            api_base: defaults::api_base(),
            document_type: defaults::document_type(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Archive bucket settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// S3 bucket holding archived filings
    #[serde(default = "defaults::bucket")]
    pub bucket: String,

    /// AWS region for the bucket and the email service
    #[serde(default = "defaults::region")]
    pub region: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            bucket: defaults::bucket(),
            region: defaults::region(),
        }
    }
}

/// Notification email settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Verified SES sender identity
    #[serde(default = "defaults::sender")]
    pub sender: String,

    /// Fixed distribution list, one message per new filing per address
    #[serde(default = "defaults::recipients")]
    pub recipients: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: defaults::sender(),
            recipients: defaults::recipients(),
        }
    }
}

mod defaults {
    // Watch defaults
    pub fn registrant_id() -> u64 {
        5483
    }
    pub fn api_base() -> String {
        "https://efile.fara.gov/api/v1".into()
    }
    pub fn document_type() -> String {
        "SUPPLEMENTAL_STATEMENT".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; fara-watcher/1.0)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Archive defaults
    pub fn bucket() -> String {
        "fara-watcher".into()
    }
    pub fn region() -> String {
        "us-east-1".into()
    }

    // Email defaults
    pub fn sender() -> String {
        "James Gordon <gordonj@rjionline.org>".into()
    }
    pub fn recipients() -> Vec<String> {
        vec![
            "gordonj@missouri.edu".into(),
            "kielyk@missouri.edu".into(),
            "elisevmulligan@gmail.com".into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_registrant() {
        let mut config = Config::default();
        config.watch.registrant_id = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_bucket() {
        let mut config = Config::default();
        config.archive.bucket = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_recipients() {
        let mut config = Config::default();
        config.email.recipients.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_partial_toml_fills_defaults() {
        let toml = r#"
            [watch]
            registrant_id = 1234

            [email]
            recipients = ["watch@example.org"]
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.watch.registrant_id, 1234);
        assert_eq!(config.watch.document_type, "SUPPLEMENTAL_STATEMENT");
        assert_eq!(config.archive.bucket, "fara-watcher");
        assert_eq!(config.email.recipients, vec!["watch@example.org"]);
    }
}
