//! Health metric time series and their summary statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, error::HealthAiError};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Dates and values of a metric, paired by index
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Timeline {
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

/// Summary of a metric over a requested range of days
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HealthTrend {
    pub latest: f64,
    /// Unit label of the values
    pub metric: String,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub trend: TrendDirection,
    pub timeline: Timeline,
}

impl Timeline {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl HealthTrend {
    /// Summarize a timeline. The latest value is the last one in the timeline.
    pub fn from_timeline(
        unit: impl Into<String>,
        timeline: Timeline,
        trend: TrendDirection,
    ) -> Result<Self> {
        if timeline.dates.len() != timeline.values.len() {
            return Err(HealthAiError::validation(format!(
                "timeline has {} dates but {} values",
                timeline.dates.len(),
                timeline.values.len()
            )));
        }
        let Some(&latest) = timeline.values.last() else {
            return Err(HealthAiError::validation("timeline has no values"));
        };

        let sum: f64 = timeline.values.iter().sum();
        let average = sum / timeline.values.len() as f64;
        let minimum = timeline.values.iter().copied().fold(f64::INFINITY, f64::min);
        let maximum = timeline
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            latest,
            metric: unit.into(),
            average,
            minimum,
            maximum,
            trend,
            timeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_summary_statistics() {
        let timeline = Timeline {
            dates: vec![date(3), date(2), date(1)],
            values: vec![70.0, 68.0, 72.0],
        };
        let trend = HealthTrend::from_timeline("kg", timeline, TrendDirection::Stable).unwrap();
        assert_eq!(trend.latest, 72.0);
        assert_eq!(trend.average, 70.0);
        assert_eq!(trend.minimum, 68.0);
        assert_eq!(trend.maximum, 72.0);
        assert_eq!(trend.metric, "kg");
    }

    #[test]
    fn test_empty_timeline_is_rejected() {
        let timeline = Timeline {
            dates: vec![],
            values: vec![],
        };
        let err = HealthTrend::from_timeline("units", timeline, TrendDirection::Increasing)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_mismatched_timeline_is_rejected() {
        let timeline = Timeline {
            dates: vec![date(1)],
            values: vec![1.0, 2.0],
        };
        assert!(
            HealthTrend::from_timeline("units", timeline, TrendDirection::Increasing).is_err()
        );
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Increasing).unwrap();
        assert_eq!(json, "\"increasing\"");
    }
}
