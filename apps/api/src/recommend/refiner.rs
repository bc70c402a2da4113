//! LLM Refiner: enriches rule-engine plans with explanations and per-plan trust.
//!
//! Flow: normalize plans → build prompt → one bounded LLM call →
//!       strict JSON parse → embedded-object parse → heuristic fallback.
//!
//! A usable model response is returned as the raw `improved_plans` array,
//! item for item, without reshaping.
//!
//! The refiner never returns an error. Missing credentials, transport failures,
//! timeouts and unparseable output all land on the local heuristic, which is
//! marked with `FALLBACK_TRUST_REASON` so callers can tell the paths apart.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::models::plan::round2;
use crate::models::{EnrichedPlan, Plan};
use crate::recommend::prompts::{REFINE_PROMPT_TEMPLATE, REFINE_SYSTEM};

/// `trust_reason` on every heuristic result.
pub const FALLBACK_TRUST_REASON: &str =
    "Heuristic fallback: scored locally from survey answers, not by the language model";

const FALLBACK_BASE_SCORE: f64 = 0.6;
const FALLBACK_CROP_BONUS: f64 = 0.2;
const FALLBACK_MICRO_BONUS: f64 = 0.15;
const FALLBACK_LOW_INCOME: f64 = 15000.0;
const SECONDARY_LANGUAGE_TAG: &str = "[hi]";

// ────────────────────────────────────────────────────────────────────────────
// Input normalization
// ────────────────────────────────────────────────────────────────────────────

/// A plan as callers may hand it over: a typed `Plan` or any JSON object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlanInput {
    Structured(Plan),
    Generic(Map<String, Value>),
}

impl From<Plan> for PlanInput {
    fn from(plan: Plan) -> Self {
        PlanInput::Structured(plan)
    }
}

/// Canonical record every plan is reduced to before prompting or scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPlan {
    pub name: String,
    pub reason: Option<String>,
    pub estimated_premium: Option<f64>,
}

pub fn normalize_plan(input: PlanInput) -> NormalizedPlan {
    match input {
        PlanInput::Structured(plan) => NormalizedPlan {
            name: plan.name,
            reason: plan.reason,
            estimated_premium: plan.estimated_premium,
        },
        PlanInput::Generic(record) => NormalizedPlan {
            name: match record.get("name") {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            },
            reason: match record.get("reason") {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            },
            estimated_premium: record.get("estimated_premium").and_then(as_number),
        },
    }
}

/// Reads a JSON number, or a string holding one.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

// ────────────────────────────────────────────────────────────────────────────
// Response parsing
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("not a JSON object with an improved_plans array: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("no JSON object found in response")]
    NoObject,
}

#[derive(Debug, Deserialize)]
struct ImprovedPlansEnvelope {
    improved_plans: Vec<Value>,
}

/// Two-stage parse of a model response: the whole text first, then the span
/// from the first `{` to the last `}`.
pub fn parse_improved_plans(text: &str) -> Result<Vec<Value>, ExtractError> {
    parse_strict(text).or_else(|_| parse_embedded(text))
}

fn parse_strict(text: &str) -> Result<Vec<Value>, ExtractError> {
    let envelope: ImprovedPlansEnvelope = serde_json::from_str(text)?;
    Ok(envelope.improved_plans)
}

fn parse_embedded(text: &str) -> Result<Vec<Value>, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoObject)?;
    if end < start {
        return Err(ExtractError::NoObject);
    }
    parse_strict(&text[start..=end])
}

// ────────────────────────────────────────────────────────────────────────────
// Refiner
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementSource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Refinement {
    pub source: RefinementSource,
    pub plans: Vec<Value>,
}

#[derive(Clone)]
pub struct Refiner {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl Refiner {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Enriched plans only; see `refine` for the path that produced them.
    pub async fn enhance_recommendations(
        &self,
        plans: Vec<PlanInput>,
        survey_data: &Map<String, Value>,
    ) -> Vec<Value> {
        self.refine(plans, survey_data).await.plans
    }

    /// An empty plan list returns an empty `Fallback` refinement without calling the model.
    pub async fn refine(
        &self,
        plans: Vec<PlanInput>,
        survey_data: &Map<String, Value>,
    ) -> Refinement {
        let plans: Vec<NormalizedPlan> = plans.into_iter().map(normalize_plan).collect();

        if plans.is_empty() {
            return Refinement {
                source: RefinementSource::Fallback,
                plans: vec![],
            };
        }

        if !self.generator.is_configured() {
            info!("Text generator not configured, using heuristic refinement");
            return fallback(&plans, survey_data);
        }

        let prompt = match build_refine_prompt(&plans, survey_data) {
            Ok(prompt) => prompt,
            Err(e) => {
                warn!("Failed to build refinement prompt: {e}");
                return fallback(&plans, survey_data);
            }
        };

        let completion =
            tokio::time::timeout(self.timeout, self.generator.complete(&prompt, REFINE_SYSTEM))
                .await;

        let text = match completion {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Refinement LLM call failed, falling back: {e}");
                return fallback(&plans, survey_data);
            }
            Err(_) => {
                warn!(
                    "Refinement LLM call exceeded {:?}, falling back",
                    self.timeout
                );
                return fallback(&plans, survey_data);
            }
        };

        match parse_improved_plans(&text) {
            Ok(improved) => {
                info!("Refined {} plans via LLM", improved.len());
                Refinement {
                    source: RefinementSource::Llm,
                    plans: improved,
                }
            }
            Err(e) => {
                warn!(
                    "Unusable refinement response ({e}), falling back: {:?}",
                    text.chars().take(80).collect::<String>()
                );
                fallback(&plans, survey_data)
            }
        }
    }
}

fn build_refine_prompt(
    plans: &[NormalizedPlan],
    survey_data: &Map<String, Value>,
) -> Result<String, serde_json::Error> {
    let survey_json = serde_json::to_string_pretty(survey_data)?;
    let plans_json = serde_json::to_string_pretty(plans)?;
    Ok(REFINE_PROMPT_TEMPLATE
        .replace("{survey_json}", &survey_json)
        .replace("{plans_json}", &plans_json))
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristic fallback
// ────────────────────────────────────────────────────────────────────────────

fn fallback(plans: &[NormalizedPlan], survey_data: &Map<String, Value>) -> Refinement {
    Refinement {
        source: RefinementSource::Fallback,
        plans: plans
            .iter()
            .map(|plan| Value::from(fallback_plan(plan, survey_data)))
            .collect(),
    }
}

fn fallback_plan(plan: &NormalizedPlan, survey_data: &Map<String, Value>) -> EnrichedPlan {
    let occupation = survey_data
        .get("occupation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_lowercase();
    let income = survey_data.get("income").and_then(as_number);
    let plan_name = plan.name.to_lowercase();

    let mut score = FALLBACK_BASE_SCORE;
    if occupation.contains("farm") && plan_name.contains("crop") {
        score += FALLBACK_CROP_BONUS;
    }
    if income.is_some_and(|i| i < FALLBACK_LOW_INCOME) && plan_name.contains("micro") {
        score += FALLBACK_MICRO_BONUS;
    }

    let reason = plan.reason.as_deref().unwrap_or("Recommended");

    EnrichedPlan {
        name: plan.name.clone(),
        refined_explanation: format!(
            "{reason}. This plan is suggested based on your survey answers."
        ),
        trust_score: round2(score.clamp(0.0, 1.0)),
        trust_reason: FALLBACK_TRUST_REASON.to_string(),
        secondary_language_explanation: format!("{SECONDARY_LANGUAGE_TAG} {reason}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
