//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::{RecommendationResult, SurveyInput};
use crate::recommend::refiner::{PlanInput, RefinementSource};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub refine: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    #[serde(flatten)]
    pub result: RecommendationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improved_plans: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_source: Option<RefinementSource>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub plans: Vec<PlanInput>,
    #[serde(default)]
    pub survey_data: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub improved_plans: Vec<Value>,
    pub enrichment_source: RefinementSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /recommend
///
/// Runs the rule engine. With `?refine=true` the plans are also passed through
/// the refiner, using the request fields as survey data.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
    Json(survey): Json<SurveyInput>,
) -> Json<RecommendResponse> {
    let result = state.engine.recommend(&survey);
    info!(
        "Recommended {} plans (trust {:.2}, premium {:.2})",
        result.plans.len(),
        result.trust_score,
        result.total_premium
    );

    if !query.refine {
        return Json(RecommendResponse {
            result,
            improved_plans: None,
            enrichment_source: None,
        });
    }

    let plans = result.plans.iter().cloned().map(PlanInput::from).collect();
    let refinement = state.refiner.refine(plans, &survey.to_survey_data()).await;

    Json(RecommendResponse {
        result,
        improved_plans: Some(refinement.plans),
        enrichment_source: Some(refinement.source),
    })
}

/// POST /recommend/enhance
///
/// Refines caller-supplied plans (typed or free-form objects) against arbitrary
/// survey data.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    if request.plans.is_empty() {
        return Err(AppError::Validation("plans cannot be empty".to_string()));
    }

    let refinement = state
        .refiner
        .refine(request.plans, &request.survey_data)
        .await;

    Ok(Json(EnhanceResponse {
        improved_plans: refinement.plans,
        enrichment_source: refinement.source,
    }))
}
