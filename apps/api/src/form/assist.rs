use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields an insurance application cannot be submitted without, in display order.
pub const REQUIRED_FIELDS: [&str; 5] = ["name", "aadhaar", "address", "phone", "age"];

const AADHAAR_DIGITS: usize = 12;

const STATIC_HINTS: &[&str] = &["Fill Aadhaar exactly as shown on card."];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormRequest {
    pub name: Option<String>,
    pub aadhaar: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub age: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormAssistResponse {
    pub missing_fields: Vec<String>,
    pub aadhaar_valid: bool,
    pub aadhaar_suggestion: Option<String>,
    pub hints: Vec<String>,
    /// Submitted values that passed the presence check, with Aadhaar normalized to digits.
    pub cleaned: Map<String, Value>,
}

impl FormRequest {
    fn field(&self, name: &str) -> Option<Value> {
        let text = |v: &Option<String>| {
            v.as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(|s| Value::String(s.to_string()))
        };
        match name {
            "name" => text(&self.name),
            "aadhaar" => text(&self.aadhaar),
            "address" => text(&self.address),
            "phone" => text(&self.phone),
            "age" => self.age.map(Value::from),
            _ => None,
        }
    }
}

/// Checks required fields and the Aadhaar number, suggesting corrections.
pub fn assist_form(form: &FormRequest) -> FormAssistResponse {
    let mut missing_fields = Vec::new();
    let mut cleaned = Map::new();
    for field in REQUIRED_FIELDS {
        match form.field(field) {
            Some(value) => {
                cleaned.insert(field.to_string(), value);
            }
            None => missing_fields.push(field.to_string()),
        }
    }

    let raw = form.aadhaar.as_deref().unwrap_or_default();
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let aadhaar_valid = digits.len() == AADHAAR_DIGITS;

    let aadhaar_suggestion = if raw.is_empty() {
        None
    } else if aadhaar_valid {
        let suggestion = group_digits(&digits);
        cleaned.insert("aadhaar".to_string(), Value::String(digits));
        Some(suggestion)
    } else if digits.len() < AADHAAR_DIGITS {
        Some(format!(
            "Aadhaar looks short. After removing non-digits we got '{digits}'. \
             Aadhaar must be 12 digits."
        ))
    } else {
        Some(format!(
            "Aadhaar looks long. After removing non-digits we got '{digits}'. \
             Aadhaar must be 12 digits; please verify."
        ))
    };

    FormAssistResponse {
        missing_fields,
        aadhaar_valid,
        aadhaar_suggestion,
        hints: STATIC_HINTS.iter().map(|h| h.to_string()).collect(),
        cleaned,
    }
}

/// "123456789012" → "1234 5678 9012"
fn group_digits(digits: &str) -> String {
    digits
        .as_bytes()
        .chunks(4)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}
