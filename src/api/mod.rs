use std::sync::Arc;

use axum::{
    Router,
    extract::{
        FromRequest, FromRequestParts, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::Mutex;

use crate::{
    HealthAssistant,
    assistant::deliver_alert,
    error::HealthAiError,
    models::{
        HealthTrend, Medication, MedicationIntake, MedicationReminder, Symptom, SymptomAnalysis,
    },
};

pub type SharedAssistant = Arc<Mutex<HealthAssistant>>;

const DEFAULT_TREND_DAYS: u32 = 30;

#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    pub metric: Option<String>,
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct NewMedication {
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default = "default_days_supply")]
    pub days_supply: u32,
}

fn default_days_supply() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AlertRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AlertReceipt {
    pub sent: bool,
    pub message: String,
}

/// JSON error body understood by the dashboard (`{"error": ...}`)
pub struct ApiError(HealthAiError);

impl From<HealthAiError> for ApiError {
    fn from(err: HealthAiError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(HealthAiError::validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(HealthAiError::validation(rejection.body_text()))
    }
}

/// `Json` body extractor whose rejections are [`ApiError`]s
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Query` extractor whose rejections are [`ApiError`]s
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("Request failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}

pub fn router(assistant: SharedAssistant) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/symptoms/analyze", post(analyze_symptoms))
        .route("/trends", get(get_trends))
        .route("/medications", get(list_medications).post(add_medication))
        .route("/medications/reminders", get(get_reminders))
        .route("/medications/taken", post(record_taken))
        .route("/emergency", post(send_alert))
        .with_state(assistant)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

async fn analyze_symptoms(
    State(assistant): State<SharedAssistant>,
    ApiJson(symptoms): ApiJson<Vec<Symptom>>,
) -> Result<Json<SymptomAnalysis>, ApiError> {
    if let Some(symptom) = symptoms.iter().find(|s| !(1..=10).contains(&s.severity)) {
        return Err(HealthAiError::validation(format!(
            "severity of '{}' must be between 1 and 10",
            symptom.name
        ))
        .into());
    }
    let assistant = assistant.lock().await;
    Ok(Json(assistant.analyze_symptoms(&symptoms)))
}

async fn get_trends(
    State(assistant): State<SharedAssistant>,
    ApiQuery(query): ApiQuery<TrendQuery>,
) -> Result<Json<HealthTrend>, ApiError> {
    let metric = query.metric.as_deref().unwrap_or("weight");
    let days = query.days.unwrap_or(DEFAULT_TREND_DAYS);
    let assistant = assistant.lock().await;
    Ok(Json(assistant.get_health_trends(metric, days)?))
}

async fn list_medications(State(assistant): State<SharedAssistant>) -> Json<Vec<Medication>> {
    let assistant = assistant.lock().await;
    Json(assistant.medications().to_vec())
}

async fn add_medication(
    State(assistant): State<SharedAssistant>,
    ApiJson(payload): ApiJson<NewMedication>,
) -> Result<(StatusCode, Json<Medication>), ApiError> {
    if payload.name.is_empty() {
        return Err(HealthAiError::validation("medication name cannot be empty").into());
    }
    let mut assistant = assistant.lock().await;
    let medication = assistant.add_medication(
        &payload.name,
        &payload.dosage,
        &payload.frequency,
        payload.days_supply,
    );
    Ok((StatusCode::CREATED, Json(medication)))
}

async fn get_reminders(State(assistant): State<SharedAssistant>) -> Json<Vec<MedicationReminder>> {
    let assistant = assistant.lock().await;
    Json(assistant.get_medication_reminders())
}

async fn record_taken(
    State(assistant): State<SharedAssistant>,
    ApiJson(payload): ApiJson<IntakeRequest>,
) -> Json<MedicationIntake> {
    let assistant = assistant.lock().await;
    Json(assistant.record_medication_taken(&payload.name))
}

async fn send_alert(
    State(assistant): State<SharedAssistant>,
    ApiJson(payload): ApiJson<AlertRequest>,
) -> Result<Json<AlertReceipt>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(
            HealthAiError::validation("Please enter a message before sending.").into(),
        );
    }
    // Delivery can be slow; don't hold the assistant while it runs
    let dispatcher = assistant.lock().await.dispatcher();
    deliver_alert(dispatcher.as_ref(), &payload.message).await;
    Ok(Json(AlertReceipt {
        sent: true,
        message: "Emergency alerts sent to all registered contacts!".to_string(),
    }))
}
