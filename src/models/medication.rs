//! Medication tracking models

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A medication the user is taking
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Medication {
    pub name: String,
    /// e.g. "200mg"
    pub dosage: String,
    /// e.g. "every 6 hours"
    pub frequency: String,
}

/// A notice that a dose is due
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MedicationReminder {
    pub message: String,
    pub last_taken: String,
}

/// Acknowledgement that a dose was reported as taken
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MedicationIntake {
    pub name: String,
    pub taken_at: DateTime<Utc>,
}

impl Medication {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
        }
    }
}

impl Display for Medication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.dosage, self.frequency)
    }
}

impl Display for MedicationReminder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "💊 {} (Last taken: {})", self.message, self.last_taken)
    }
}
