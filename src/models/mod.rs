//! Data models for the HealthAI service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates of the assistant's user
//! - Symptom: A reported complaint and the analysis returned for it
//! - Medication: Tracked medications, reminders and intake acknowledgements
//! - Trend: Health metric time series

pub mod analysis;
pub mod location;
pub mod medication;
pub mod symptom;
pub mod trend;

// Re-export all public types for convenient access
pub use analysis::{ConditionLikelihood, DoctorRecommendation, SymptomAnalysis};
pub use location::Location;
pub use medication::{Medication, MedicationIntake, MedicationReminder};
pub use symptom::Symptom;
pub use trend::{HealthTrend, Timeline, TrendDirection};
