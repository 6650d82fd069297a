//! The health assistant service behind the dashboard panels
//!
//! Symptom analysis, trends and reminders return canned data: there is no
//! diagnosis model, metric source or scheduler behind them yet.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate, Utc};
use tracing::instrument;

use crate::{
    Result,
    alerts::{AlertDispatcher, LogAlertDispatcher},
    error::HealthAiError,
    models::{
        ConditionLikelihood, DoctorRecommendation, HealthTrend, Location, Medication,
        MedicationIntake, MedicationReminder, Symptom, SymptomAnalysis, Timeline, TrendDirection,
    },
};

/// Unit label reported for every trend
const TREND_UNIT: &str = "units";

/// Longest trend range that can be requested
pub const MAX_TREND_DAYS: u32 = 365;

pub struct HealthAssistant {
    location: Location,
    medications: Vec<Medication>,
    dispatcher: Arc<dyn AlertDispatcher>,
}

impl std::fmt::Debug for HealthAssistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthAssistant")
            .field("location", &self.location)
            .field("medications", &self.medications)
            .field("dispatcher", &self.dispatcher.channel())
            .finish()
    }
}

impl HealthAssistant {
    /// Create an assistant that only logs emergency alerts
    #[must_use]
    pub fn new(location: Location) -> Self {
        Self::with_dispatcher(location, Arc::new(LogAlertDispatcher))
    }

    #[must_use]
    pub fn with_dispatcher(location: Location, dispatcher: Arc<dyn AlertDispatcher>) -> Self {
        Self {
            location,
            medications: Vec::new(),
            dispatcher,
        }
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Shared handle to the alert dispatcher, usable without holding the assistant
    #[must_use]
    pub fn dispatcher(&self) -> Arc<dyn AlertDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    /// Medications in the order they were added
    #[must_use]
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    /// Always reports the same non-emergency result; the symptoms are not inspected.
    #[instrument(level = "debug", skip(self, symptoms), fields(count = symptoms.len()))]
    pub fn analyze_symptoms(&self, symptoms: &[Symptom]) -> SymptomAnalysis {
        SymptomAnalysis {
            emergency: false,
            message: "No emergency detected.".to_string(),
            recommendation: "Drink water and rest.".to_string(),
            conditions: vec![ConditionLikelihood {
                condition: "Mild fever".to_string(),
                confidence: 0.75,
            }],
            recommended_doctors: vec![DoctorRecommendation {
                name: "Dr. Meera".to_string(),
                specialty: "General Physician".to_string(),
                rating: 4.5,
                distance_km: 2.3,
                contact: "123-456-7890".to_string(),
            }],
        }
    }

    /// Synthetic trend of `days` points ending today.
    pub fn get_health_trends(&self, metric: &str, days: u32) -> Result<HealthTrend> {
        self.get_health_trends_on(metric, days, Local::now().date_naive())
    }

    /// Same as [`Self::get_health_trends`] with an explicit "today".
    ///
    /// Values count up from 1 while dates walk backward from `today`, so
    /// `values[i]` belongs to `today - i` days. The metric name does not
    /// affect the data.
    #[instrument(level = "debug", skip(self))]
    pub fn get_health_trends_on(
        &self,
        metric: &str,
        days: u32,
        today: NaiveDate,
    ) -> Result<HealthTrend> {
        if days == 0 {
            return Err(HealthAiError::validation("days must be at least 1"));
        }
        if days > MAX_TREND_DAYS {
            return Err(HealthAiError::validation(format!(
                "days cannot exceed {MAX_TREND_DAYS}"
            )));
        }

        let dates = (0..days)
            .map(|i| {
                today.checked_sub_days(Days::new(u64::from(i))).ok_or_else(|| {
                    HealthAiError::validation(format!("{days} days before {today} is out of range"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let values = (1..=days).map(f64::from).collect();

        HealthTrend::from_timeline(
            TREND_UNIT,
            Timeline { dates, values },
            TrendDirection::Increasing,
        )
    }

    /// One canned reminder, independent of the medication list and the clock.
    #[must_use]
    pub fn get_medication_reminders(&self) -> Vec<MedicationReminder> {
        vec![MedicationReminder {
            message: "Take Paracetamol 500mg".to_string(),
            last_taken: "8:00 AM".to_string(),
        }]
    }

    /// Acknowledges an intake. Nothing is stored.
    pub fn record_medication_taken(&self, name: &str) -> MedicationIntake {
        tracing::info!("Medication {} recorded as taken.", name);
        MedicationIntake {
            name: name.to_string(),
            taken_at: Utc::now(),
        }
    }

    /// `days_supply` is accepted for the dashboard form but not kept.
    #[instrument(level = "debug", skip(self))]
    pub fn add_medication(
        &mut self,
        name: &str,
        dosage: &str,
        frequency: &str,
        days_supply: u32,
    ) -> Medication {
        let medication = Medication::new(name, dosage, frequency);
        self.medications.push(medication.clone());
        tracing::info!("Added medication {}", medication);
        medication
    }

    /// Hands the message to the dispatcher. Delivery failures are logged, never returned.
    pub async fn send_emergency_alert(&self, message: &str) {
        deliver_alert(self.dispatcher.as_ref(), message).await;
    }
}

/// Dispatch an emergency alert, logging delivery failures instead of returning them.
///
/// Callers that share the assistant behind a lock take [`HealthAssistant::dispatcher`]
/// and call this after releasing it.
#[instrument(level = "debug", skip(dispatcher, message), fields(channel = dispatcher.channel()))]
pub async fn deliver_alert(dispatcher: &dyn AlertDispatcher, message: &str) {
    if let Err(err) = dispatcher.dispatch(message).await {
        tracing::error!(
            "Failed to deliver emergency alert via {}: {:#}",
            dispatcher.channel(),
            err
        );
    }
}

impl Default for HealthAssistant {
    fn default() -> Self {
        Self::new(Location::default())
    }
}
