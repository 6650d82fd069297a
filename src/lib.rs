//! `HealthAI` - Personal health assistant service
//!
//! This library provides the service layer behind the health dashboard:
//! symptom checks, health metric trends, medication tracking and
//! emergency alert dispatch, exposed as a JSON API and a CLI.

pub mod alerts;
pub mod api;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use alerts::{AlertDispatcher, EmailAlertDispatcher, LogAlertDispatcher};
pub use assistant::HealthAssistant;
pub use cli::HealthAssistantCli;
pub use config::HealthAiConfig;
pub use error::HealthAiError;
pub use models::{HealthTrend, Location, Medication, Symptom, SymptomAnalysis};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HealthAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
