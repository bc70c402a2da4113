use serde::{Deserialize, Serialize};

/// The three survey answers the rule engine consumes.
///
/// `income` and `family_size` are signed and unvalidated: zero or negative
/// values are accepted and flow through the scoring arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyInput {
    #[serde(default)]
    pub occupation: String,
    pub income: i64,
    pub family_size: i64,
}

impl SurveyInput {
    pub fn new(occupation: impl Into<String>, income: i64, family_size: i64) -> Self {
        Self {
            occupation: occupation.into(),
            income,
            family_size,
        }
    }

    /// Occupation trimmed and lower-cased, the form every rule matches against.
    pub fn normalized_occupation(&self) -> String {
        self.occupation.trim().to_lowercase()
    }

    /// The answers as a generic survey mapping, for the refiner prompt.
    pub fn to_survey_data(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut data = serde_json::Map::new();
        data.insert("occupation".into(), self.occupation.clone().into());
        data.insert("income".into(), self.income.into());
        data.insert("family_size".into(), self.family_size.into());
        data
    }
}
