//! Reported symptoms

use serde::{Deserialize, Serialize};

/// A reported health complaint
///
/// Nothing is validated here: the severity scale (1-10) is only bounded by
/// the input surfaces that construct symptoms.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Symptom {
    pub name: String,
    pub severity: u8,
    /// Free text such as "2 days"
    pub duration: String,
}

impl Symptom {
    #[must_use]
    pub fn new(name: impl Into<String>, severity: u8, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            severity,
            duration: duration.into(),
        }
    }
}
