use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SurveyQuestion {
    pub id: u32,
    /// Answer key the client sends back (matches recommendation inputs where they overlap).
    pub key: &'static str,
    pub question: &'static str,
}

const fn question(id: u32, key: &'static str, question: &'static str) -> SurveyQuestion {
    SurveyQuestion { id, key, question }
}

pub static SURVEY_QUESTIONS: [SurveyQuestion; 10] = [
    question(1, "family_size", "What is your family size?"),
    question(2, "income", "What is your monthly household income (in INR)?"),
    question(3, "occupation", "What is your primary occupation?"),
    question(4, "land_size", "How much agricultural land do you own (in acres)?"),
    question(
        5,
        "health_history",
        "Do you have any chronic health conditions? If yes, please list.",
    ),
    question(
        6,
        "loan_burden",
        "Do you have outstanding loans? Please indicate total monthly EMI (if any).",
    ),
    question(7, "num_dependents", "How many dependents do you have?"),
    question(
        8,
        "risk_concerns",
        "What are your main risk concerns (crop failure, health, livestock, etc.)?",
    ),
    question(
        9,
        "hospital_visits_freq",
        "How often do you visit a hospital in a year?",
    ),
    question(
        10,
        "livestock_ownership",
        "Do you own livestock? If yes, specify types and count.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_sequential_and_keys_unique() {
        for (i, q) in SURVEY_QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
        }
        let keys: HashSet<_> = SURVEY_QUESTIONS.iter().map(|q| q.key).collect();
        assert_eq!(keys.len(), SURVEY_QUESTIONS.len());
    }

    #[test]
    fn test_covers_rule_engine_inputs() {
        for key in ["occupation", "income", "family_size"] {
            assert!(SURVEY_QUESTIONS.iter().any(|q| q.key == key), "missing {key}");
        }
    }
}
