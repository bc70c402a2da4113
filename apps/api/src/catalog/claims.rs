use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    Crop,
    Health,
    Life,
}

impl FromStr for PolicyType {
    type Err = UnsupportedPolicyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crop" => Ok(PolicyType::Crop),
            "health" => Ok(PolicyType::Health),
            "life" => Ok(PolicyType::Life),
            _ => Err(UnsupportedPolicyType),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported policy_type. Use 'crop', 'health' or 'life'.")]
pub struct UnsupportedPolicyType;

/// How to file a claim for one policy type.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimGuide {
    pub checklist: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub exclusions: &'static [&'static str],
    pub expected_time: &'static str,
    pub required_documents: &'static [&'static str],
}

static CROP_GUIDE: ClaimGuide = ClaimGuide {
    checklist: &[
        "Policy document / policy number",
        "Field damage photos",
        "Farmer ID (Aadhaar)",
        "Crop details and area proof",
    ],
    steps: &[
        "Notify insurer within specified claim period",
        "Submit claim form with incident details",
        "Upload photos and farmer ID",
        "Insurer schedules survey/inspection",
        "Receive claim adjudication and payout",
    ],
    exclusions: &[
        "Losses due to wilful negligence",
        "Pre-existing crop disease not disclosed",
        "Damage outside policy period",
    ],
    expected_time: "7-21 days (depends on inspection)",
    required_documents: &[
        "Policy copy",
        "Aadhaar or ID proof",
        "Field photos",
        "Land ownership or lease proof",
    ],
};

static HEALTH_GUIDE: ClaimGuide = ClaimGuide {
    checklist: &[
        "Policy card / number",
        "Hospital discharge summary",
        "Medical bills and receipts",
        "Doctor's prescriptions and reports",
    ],
    steps: &[
        "Inform insurer and obtain pre-authorization if required",
        "Get claim form and fill it",
        "Attach medical reports, bills and discharge summary",
        "Submit to insurer or TPAs for processing",
        "Insurer verifies and settles per policy terms",
    ],
    exclusions: &[
        "Cosmetic treatments (unless covered)",
        "Pre-existing conditions not disclosed (subject to waiting period)",
        "Self-inflicted injuries",
    ],
    expected_time: "10-30 days (may vary for cashless or reimbursement)",
    required_documents: &[
        "Policy copy",
        "Hospital bills & receipts",
        "Discharge summary",
        "Doctor's prescriptions and test reports",
        "Identity proof",
    ],
};

static LIFE_GUIDE: ClaimGuide = ClaimGuide {
    checklist: &[
        "Original policy document",
        "Death certificate (for nominee claims)",
        "Claimant's identity and relationship proof",
        "Bank account details for payout",
    ],
    steps: &[
        "Intimate insurer with policy number and claimant details",
        "Submit death certificate and claimant ID proofs",
        "Fill claim forms and provide bank details",
        "Insurer verifies and processes documents",
        "Payout to nominee as per policy terms",
    ],
    exclusions: &[
        "Death due to suicide within waiting period",
        "Fraudulent claims",
        "Non-disclosure of critical information",
    ],
    expected_time: "30-60 days (may take longer for investigations)",
    required_documents: &[
        "Original policy document",
        "Death certificate",
        "Claimant ID and relationship proof",
        "Bank account proof (cancelled cheque)",
    ],
};

pub fn claim_guide(policy_type: PolicyType) -> &'static ClaimGuide {
    match policy_type {
        PolicyType::Crop => &CROP_GUIDE,
        PolicyType::Health => &HEALTH_GUIDE,
        PolicyType::Life => &LIFE_GUIDE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_type_parsing_normalizes() {
        assert_eq!(" CROP ".parse::<PolicyType>(), Ok(PolicyType::Crop));
        assert_eq!("Health".parse::<PolicyType>(), Ok(PolicyType::Health));
        assert_eq!("life".parse::<PolicyType>(), Ok(PolicyType::Life));
        assert_eq!("motor".parse::<PolicyType>(), Err(UnsupportedPolicyType));
        assert_eq!("".parse::<PolicyType>(), Err(UnsupportedPolicyType));
    }

    #[test]
    fn test_every_guide_is_populated() {
        for policy_type in [PolicyType::Crop, PolicyType::Health, PolicyType::Life] {
            let guide = claim_guide(policy_type);
            assert!(!guide.checklist.is_empty());
            assert_eq!(guide.steps.len(), 5);
            assert!(!guide.required_documents.is_empty());
        }
    }

    #[test]
    fn test_policy_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PolicyType::Health).unwrap(),
            serde_json::json!("health")
        );
    }
}
