// Prompt constants for recommendation refinement.

/// System prompt: advisor persona plus strict JSON output.
pub const REFINE_SYSTEM: &str = "You are an insurance advisor for rural India. \
    Provide accurate, simple, rural-friendly explanations, \
    avoid jargon, avoid hallucination. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Refinement prompt. Replace `{survey_json}` and `{plans_json}` before sending.
pub const REFINE_PROMPT_TEMPLATE: &str = r#"A rural user answered an insurance survey and a rule engine suggested some plans.

SURVEY ANSWERS:
{survey_json}

SUGGESTED PLANS:
{plans_json}

For EACH suggested plan, in the same order:
1. Write a refined explanation of 1-2 short sentences telling this user why the plan fits them.
2. Assign a trust_score between 0.0 and 1.0 for how well the plan matches the survey, with a one-line trust_reason.
3. Write a simplified explanation in Hindi (secondary_language_explanation) that a rural reader can follow.

Return a JSON object with this EXACT schema (no extra fields, no other text):
{
  "improved_plans": [
    {
      "name": "Crop Insurance",
      "refined_explanation": "...",
      "trust_score": 0.85,
      "trust_reason": "...",
      "secondary_language_explanation": "..."
    }
  ]
}"#;
