//! Read-only endpoints over the static catalog.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::catalog::admin::{admin_stats, AdminStats};
use crate::catalog::claims::{claim_guide, ClaimGuide, PolicyType};
use crate::catalog::survey::{SurveyQuestion, SURVEY_QUESTIONS};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct SurveyQuestionsResponse {
    pub questions: &'static [SurveyQuestion],
}

#[derive(Debug, Deserialize)]
pub struct ClaimGuideQuery {
    pub policy_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClaimGuideResponse {
    pub policy_type: PolicyType,
    pub guide: &'static ClaimGuide,
}

/// GET /survey/questions
pub async fn handle_survey_questions() -> Json<SurveyQuestionsResponse> {
    Json(SurveyQuestionsResponse {
        questions: &SURVEY_QUESTIONS,
    })
}

/// GET /survey
pub async fn handle_survey() -> Json<Value> {
    Json(json!({ "message": "Survey endpoint" }))
}

/// GET /claim/guide?policy_type=crop|health|life
pub async fn handle_claim_guide(
    Query(query): Query<ClaimGuideQuery>,
) -> Result<Json<ClaimGuideResponse>, AppError> {
    let policy_type = query
        .policy_type
        .as_deref()
        .unwrap_or_default()
        .parse::<PolicyType>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(ClaimGuideResponse {
        policy_type,
        guide: claim_guide(policy_type),
    }))
}

/// GET /admin
pub async fn handle_admin() -> Json<Value> {
    Json(json!({ "message": "Admin endpoint" }))
}

/// GET /admin/stats
pub async fn handle_admin_stats() -> Json<AdminStats> {
    Json(admin_stats())
}
