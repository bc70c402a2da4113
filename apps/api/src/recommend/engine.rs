//! Rule Engine: survey answers to an ordered plan list, trust score and explanation.
//!
//! Pure and total: no I/O, never fails, identical input gives identical output.
//!
//! Rules run in a fixed order and are independently additive:
//! 1. farmer occupation → crop plan
//! 2. family size above threshold → family plan
//! 3. income below threshold → micro plan
//! 4. nothing fired → default plan

use crate::models::plan::round2;
use crate::models::{Plan, RecommendationResult, SurveyInput};
use crate::recommend::rules::RuleTable;

#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: RuleTable,
}

impl RuleEngine {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn recommend(&self, input: &SurveyInput) -> RecommendationResult {
        let rules = &self.rules;
        let is_farmer = input.normalized_occupation() == rules.farmer_occupation;
        let is_large_family = input.family_size > rules.large_family_threshold;
        let is_low_income = input.income < rules.low_income_threshold;

        let mut plans = Vec::with_capacity(3);
        if is_farmer {
            plans.push(rules.crop_plan.to_plan());
        }
        if is_large_family {
            plans.push(rules.family_plan.to_plan());
        }
        if is_low_income {
            plans.push(rules.micro_plan.to_plan());
        }
        if plans.is_empty() {
            plans.push(rules.default_plan.to_plan());
        }

        let trust_score = self.trust_score(is_farmer, input.family_size, is_low_income);
        let total_premium = round2(
            plans
                .iter()
                .map(|p| p.estimated_premium.unwrap_or(0.0))
                .sum(),
        );
        let explanation = build_explanation(&plans);

        RecommendationResult {
            plans,
            trust_score,
            total_premium,
            explanation,
        }
    }

    /// Heuristic confidence, not a probability. Always within [0, 1].
    fn trust_score(&self, is_farmer: bool, family_size: i64, is_low_income: bool) -> f64 {
        let weights = &self.rules.trust;
        let mut score = weights.base;
        if is_farmer {
            score += weights.farmer_bonus;
        }
        let extra_members = family_size.saturating_sub(1).max(0) as f64;
        score += (weights.per_family_member * extra_members).min(weights.family_bonus_cap);
        if is_low_income {
            score += weights.low_income_bonus;
        }
        round2(score.clamp(0.0, 1.0))
    }
}

/// Convenience entry point using the built-in rule table.
pub fn recommend(occupation: &str, income: i64, family_size: i64) -> RecommendationResult {
    RuleEngine::default().recommend(&SurveyInput::new(occupation, income, family_size))
}

fn build_explanation(plans: &[Plan]) -> String {
    plans
        .iter()
        .map(|p| {
            format!(
                "{}: {} (premium ₹{:.2})",
                p.name,
                p.reason.as_deref().unwrap_or("recommended"),
                p.estimated_premium.unwrap_or(0.0)
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(result: &RecommendationResult) -> Vec<&str> {
        result.plans.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_rule_matches_gives_standard_life_cover() {
        for occupation in ["teacher", "", "farmers", "farm hand"] {
            for family_size in [-1, 0, 1, 3] {
                let result = recommend(occupation, 15000, family_size);
                assert_eq!(names(&result), vec!["Standard Life Cover"]);
                assert_eq!(result.total_premium, 1500.0);
            }
        }
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let result = recommend("  Farmer ", 10000, 5);
        assert_eq!(
            names(&result),
            vec!["Crop Insurance", "Family Health Plan", "Micro Insurance"]
        );
        assert_eq!(result.total_premium, 7300.0);
    }

    #[test]
    fn test_scenario_farmer_low_income_family_of_four() {
        let result = recommend("farmer", 12000, 4);
        let premiums: Vec<_> = result
            .plans
            .iter()
            .map(|p| p.estimated_premium.unwrap())
            .collect();
        assert_eq!(premiums, vec![2000.0, 5000.0, 300.0]);
        // 0.70 + 0.10 + 0.03 + 0.05
        assert_eq!(result.trust_score, 0.88);
        assert_eq!(result.total_premium, 7300.0);
    }

    #[test]
    fn test_each_rule_fires_independently() {
        assert_eq!(names(&recommend("FARMER", 50000, 2)), vec!["Crop Insurance"]);
        assert_eq!(names(&recommend("weaver", 50000, 4)), vec!["Family Health Plan"]);
        assert_eq!(names(&recommend("weaver", 14999, 1)), vec!["Micro Insurance"]);
    }

    #[test]
    fn test_trust_score_stays_in_bounds_for_extreme_input() {
        let result = recommend("farmer", -5000, 1000);
        // 0.70 + 0.10 + 0.15 (capped) + 0.05 = 1.00
        assert_eq!(result.trust_score, 1.0);

        for (income, family_size) in [(i64::MIN, i64::MIN), (i64::MAX, i64::MAX), (0, 0)] {
            let score = recommend("farmer", income, family_size).trust_score;
            assert!((0.0..=1.0).contains(&score), "score was {score}");
        }
    }

    #[test]
    fn test_trust_score_clamps_with_custom_weights() {
        let mut rules = RuleTable::default();
        rules.trust.base = 0.95;
        rules.trust.farmer_bonus = 0.5;
        let engine = RuleEngine::new(rules);
        let result = engine.recommend(&SurveyInput::new("farmer", 100, 10));
        assert_eq!(result.trust_score, 1.0);

        let mut rules = RuleTable::default();
        rules.trust.base = -2.0;
        let result = RuleEngine::new(rules).recommend(&SurveyInput::new("clerk", 50000, 1));
        assert_eq!(result.trust_score, 0.0);
    }

    #[test]
    fn test_explanation_format() {
        let result = recommend("farmer", 12000, 1);
        assert_eq!(
            result.explanation,
            "Crop Insurance: Occupation is farmer (premium ₹2000.00); \
             Micro Insurance: Low income (premium ₹300.00)"
        );
    }

    #[test]
    fn test_recommend_is_idempotent() {
        let engine = RuleEngine::default();
        let input = SurveyInput::new("Farmer", 9000, 7);
        assert_eq!(engine.recommend(&input), engine.recommend(&input));
    }

    #[test]
    fn test_rule_table_changes_outcome() {
        let mut rules = RuleTable::default();
        rules.low_income_threshold = 20000;
        rules.micro_plan.estimated_premium = 450.0;
        let result = RuleEngine::new(rules).recommend(&SurveyInput::new("clerk", 18000, 1));
        assert_eq!(names(&result), vec!["Micro Insurance"]);
        assert_eq!(result.total_premium, 450.0);
    }
}
