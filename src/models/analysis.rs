//! Result of a symptom check

use serde::{Deserialize, Serialize};

/// Outcome of analysing a set of symptoms
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SymptomAnalysis {
    pub emergency: bool,
    pub message: String,
    pub recommendation: String,
    pub conditions: Vec<ConditionLikelihood>,
    pub recommended_doctors: Vec<DoctorRecommendation>,
}

/// A possible condition and how confident the analysis is in it
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConditionLikelihood {
    pub condition: String,
    /// Confidence in the range 0.0..=1.0
    pub confidence: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DoctorRecommendation {
    pub name: String,
    pub specialty: String,
    /// Rating out of 5
    pub rating: f64,
    pub distance_km: f64,
    pub contact: String,
}

impl ConditionLikelihood {
    /// Confidence formatted as a whole percentage, e.g. "75%"
    #[must_use]
    pub fn format_confidence(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_confidence() {
        let condition = ConditionLikelihood {
            condition: "Mild fever".to_string(),
            confidence: 0.75,
        };
        assert_eq!(condition.format_confidence(), "75%");
    }
}
