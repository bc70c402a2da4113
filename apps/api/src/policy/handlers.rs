//! Axum route handler for policy simplification.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::errors::AppError;
use crate::policy::pdf::{extract_pdf_text, is_pdf_filename};
use crate::policy::summarize::summarize_policy;
use crate::state::AppState;

/// Largest accepted upload.
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct SimplifyResponse {
    pub summary: String,
    /// Exclusion extraction is not performed; always empty.
    pub exclusions: Vec<String>,
    pub explanation: String,
}

/// POST /policy/simplify
///
/// Multipart upload with a `pdf` file field. Returns a chunked summary and a
/// plain-language explanation of the policy.
pub async fn handle_simplify(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SimplifyResponse>, AppError> {
    let (file_name, data) = read_pdf_field(&mut multipart).await?;

    if !is_pdf_filename(&file_name) {
        return Err(AppError::Validation(
            "Only PDF files are supported.".to_string(),
        ));
    }

    let text = extract_pdf_text(data).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF.".to_string(),
        ));
    }

    let summary = summarize_policy(state.llm.as_ref(), &text).await;

    Ok(Json(SimplifyResponse {
        summary: summary.summary,
        exclusions: vec![],
        explanation: summary.eli5,
    }))
}

async fn read_pdf_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("pdf") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            return Ok((file_name, data));
        }
    }
    Err(AppError::Validation(
        "Missing 'pdf' file field.".to_string(),
    ))
}
