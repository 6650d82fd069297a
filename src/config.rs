//! Configuration management for the `HealthAI` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::{HealthAiError, models::Location};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `HealthAI` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthAiConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Assistant defaults
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Emergency alert delivery configuration
    #[serde(default)]
    pub alerts: AlertConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Maximum request body size in KB
    #[serde(default = "default_max_body_kb")]
    pub max_body_kb: u32,
}

/// Assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Latitude of the user's location
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    /// Longitude of the user's location
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Display name of the user's location
    #[serde(default = "default_location_name")]
    pub location_name: String,
}

/// Emergency alert delivery settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Delivery channel (log or email)
    #[serde(default = "default_alert_channel")]
    pub channel: String,
    /// SMTP relay host used by the email channel
    #[serde(default = "default_smtp_relay")]
    pub smtp_relay: String,
    /// Environment variable holding the sender address
    #[serde(default = "default_from_env")]
    pub from_env: String,
    /// Environment variable holding the SMTP password
    #[serde(default = "default_password_env")]
    pub password_env: String,
    /// Environment variable holding the emergency contact address
    #[serde(default = "default_recipient_env")]
    pub recipient_env: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8501
}

fn default_request_timeout() -> u32 {
    30
}

fn default_max_body_kb() -> u32 {
    64
}

fn default_latitude() -> f64 {
    40.7128
}

fn default_longitude() -> f64 {
    -74.0060
}

fn default_location_name() -> String {
    "New York".to_string()
}

fn default_alert_channel() -> String {
    "log".to_string()
}

fn default_smtp_relay() -> String {
    "smtp.gmail.com".to_string()
}

fn default_from_env() -> String {
    "GMAIL_ADDRESS".to_string()
}

fn default_password_env() -> String {
    "GMAIL_APP_PASSWORD".to_string()
}

fn default_recipient_env() -> String {
    "NOTIFICATION_EMAIL".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            request_timeout_seconds: default_request_timeout(),
            max_body_kb: default_max_body_kb(),
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            location_name: default_location_name(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            channel: default_alert_channel(),
            smtp_relay: default_smtp_relay(),
            from_env: default_from_env(),
            password_env: default_password_env(),
            recipient_env: default_recipient_env(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl AssistantConfig {
    /// The configured location of the user
    #[must_use]
    pub fn location(&self) -> Location {
        Location::named(self.latitude, self.longitude, self.location_name.clone())
    }
}

impl ServerConfig {
    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl HealthAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. HEALTHAI_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("HEALTHAI")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: HealthAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("healthai").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.max_body_kb == 0 {
            self.server.max_body_kb = default_max_body_kb();
        }
        if self.alerts.channel.is_empty() {
            self.alerts.channel = default_alert_channel();
        }
        if self.alerts.smtp_relay.is_empty() {
            self.alerts.smtp_relay = default_smtp_relay();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.request_timeout_seconds > 300 {
            return Err(
                HealthAiError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.server.max_body_kb > 10240 {
            return Err(
                HealthAiError::config("Maximum request body cannot exceed 10240 KB").into(),
            );
        }

        if !self.assistant.location().is_valid() {
            return Err(HealthAiError::config(format!(
                "Invalid assistant location ({}). Latitude must be within -90..90 and longitude within -180..180",
                self.assistant.location().format_coordinates()
            ))
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(HealthAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(HealthAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_channels = ["log", "email"];
        if !valid_channels.contains(&self.alerts.channel.as_str()) {
            return Err(HealthAiError::config(format!(
                "Invalid alert channel '{}'. Must be one of: {}",
                self.alerts.channel,
                valid_channels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HealthAiConfig::default();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.request_timeout_seconds, 30);
        assert_eq!(config.assistant.latitude, 40.7128);
        assert_eq!(config.assistant.longitude, -74.0060);
        assert_eq!(config.alerts.channel, "log");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = HealthAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = HealthAiConfig::default();
        config.server.request_timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_location() {
        let mut config = HealthAiConfig::default();
        config.assistant.latitude = 120.0;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid assistant location"));
    }

    #[test]
    fn test_config_validation_alert_channel() {
        let mut config = HealthAiConfig::default();
        config.alerts.channel = "pager".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = HealthAiConfig::default();
        config.server.port = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "healthai-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[assistant]\nlatitude = 52.52\nlongitude = 13.405\nlocation_name = \"Berlin\""
        )
        .unwrap();

        let config = HealthAiConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.assistant.location_name, "Berlin");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = HealthAiConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("healthai"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
