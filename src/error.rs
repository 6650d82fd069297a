//! Error types and handling for the `HealthAI` service

use thiserror::Error;

/// Main error type for the `HealthAI` service
#[derive(Error, Debug)]
pub enum HealthAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Emergency alert delivery errors
    #[error("Alert delivery error: {message}")]
    Alert { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl HealthAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new alert delivery error
    pub fn alert<S: Into<String>>(message: S) -> Self {
        Self::Alert {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            HealthAiError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            HealthAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            HealthAiError::Alert { .. } => {
                "Unable to deliver the emergency alert. Please contact emergency services directly."
                    .to_string()
            }
            HealthAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            HealthAiError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = HealthAiError::config("bad port");
        assert!(matches!(config_err, HealthAiError::Config { .. }));

        let alert_err = HealthAiError::alert("smtp down");
        assert!(matches!(alert_err, HealthAiError::Alert { .. }));

        let validation_err = HealthAiError::validation("days must be at least 1");
        assert!(validation_err.is_validation());
        assert!(!alert_err.is_validation());
    }

    #[test]
    fn test_user_messages() {
        let config_err = HealthAiError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let alert_err = HealthAiError::alert("test");
        assert!(alert_err.user_message().contains("emergency services"));

        let validation_err = HealthAiError::validation("test input");
        assert_eq!(validation_err.user_message(), "Invalid input: test input");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HealthAiError = io_err.into();
        assert!(matches!(err, HealthAiError::Io { .. }));
    }
}
