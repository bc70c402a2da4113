use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A named insurance product candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub estimated_premium: Option<f64>,
}

impl Plan {
    pub fn new(name: impl Into<String>, reason: impl Into<String>, premium: f64) -> Self {
        Self {
            name: name.into(),
            reason: Some(reason.into()),
            estimated_premium: Some(premium),
        }
    }
}

/// Output of the rule engine. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Rule evaluation order; never re-sorted, never empty.
    pub plans: Vec<Plan>,
    pub trust_score: f64,
    pub total_premium: f64,
    pub explanation: String,
}

/// Per-plan enrichment produced locally when the language model is unavailable.
///
/// Model output is never forced into this shape; it is passed through as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedPlan {
    pub name: String,
    pub refined_explanation: String,
    pub trust_score: f64,
    pub trust_reason: String,
    pub secondary_language_explanation: String,
}

impl From<EnrichedPlan> for Value {
    fn from(plan: EnrichedPlan) -> Self {
        json!({
            "name": plan.name,
            "refined_explanation": plan.refined_explanation,
            "trust_score": plan.trust_score,
            "trust_reason": plan.trust_reason,
            "secondary_language_explanation": plan.secondary_language_explanation,
        })
    }
}

/// Rounds to two decimal places, the precision of every score and premium we emit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
