//! Business constants for the rule engine, kept as data.
//!
//! The engine reads thresholds, plan definitions and trust weights only from a
//! `RuleTable`. Operators can replace any subset of the defaults with a JSON
//! file (see `RULES_PATH`); omitted keys keep their default values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Plan;

/// A plan the engine can emit when its rule fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRule {
    pub name: String,
    pub reason: String,
    pub estimated_premium: f64,
}

impl PlanRule {
    fn new(name: &str, reason: &str, estimated_premium: f64) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.to_string(),
            estimated_premium,
        }
    }

    pub fn to_plan(&self) -> Plan {
        Plan::new(&self.name, &self.reason, self.estimated_premium)
    }
}

/// Additive adjustments behind the trust score heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustWeights {
    pub base: f64,
    pub farmer_bonus: f64,
    /// Added once per family member beyond the first.
    pub per_family_member: f64,
    pub family_bonus_cap: f64,
    pub low_income_bonus: f64,
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            base: 0.70,
            farmer_bonus: 0.10,
            per_family_member: 0.01,
            family_bonus_cap: 0.15,
            low_income_bonus: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTable {
    /// Normalized occupation that triggers the crop plan.
    pub farmer_occupation: String,
    pub crop_plan: PlanRule,
    /// Families strictly larger than this get the family plan.
    pub large_family_threshold: i64,
    pub family_plan: PlanRule,
    /// Incomes strictly below this get the micro plan.
    pub low_income_threshold: i64,
    pub micro_plan: PlanRule,
    /// Emitted alone when no other rule fires.
    pub default_plan: PlanRule,
    pub trust: TrustWeights,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            farmer_occupation: "farmer".to_string(),
            crop_plan: PlanRule::new("Crop Insurance", "Occupation is farmer", 2000.0),
            large_family_threshold: 3,
            family_plan: PlanRule::new("Family Health Plan", "Large family size", 5000.0),
            low_income_threshold: 15000,
            micro_plan: PlanRule::new("Micro Insurance", "Low income", 300.0),
            default_plan: PlanRule::new(
                "Standard Life Cover",
                "No specific rule matched; generic protection",
                1500.0,
            ),
            trust: TrustWeights::default(),
        }
    }
}

impl RuleTable {
    /// Loads a (possibly partial) rule table from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule table from {}", path.display()))?;
        let mut table: RuleTable = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid rule table JSON in {}", path.display()))?;
        table.farmer_occupation = table.farmer_occupation.trim().to_lowercase();
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_table_values() {
        let table = RuleTable::default();
        assert_eq!(table.crop_plan.estimated_premium, 2000.0);
        assert_eq!(table.family_plan.estimated_premium, 5000.0);
        assert_eq!(table.micro_plan.estimated_premium, 300.0);
        assert_eq!(table.default_plan.name, "Standard Life Cover");
        assert_eq!(table.large_family_threshold, 3);
        assert_eq!(table.low_income_threshold, 15000);
        assert_eq!(table.trust, TrustWeights::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"low_income_threshold": 20000, "trust": {{"base": 0.5}}, "farmer_occupation": " Kisan "}}"#
        )
        .unwrap();

        let table = RuleTable::from_path(file.path()).unwrap();
        assert_eq!(table.low_income_threshold, 20000);
        assert_eq!(table.trust.base, 0.5);
        assert_eq!(table.trust.farmer_bonus, 0.10);
        assert_eq!(table.farmer_occupation, "kisan");
        assert_eq!(table.crop_plan, RuleTable::default().crop_plan);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = RuleTable::from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid rule table JSON"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(RuleTable::from_path(Path::new("/nonexistent/rules.json")).is_err());
    }
}
