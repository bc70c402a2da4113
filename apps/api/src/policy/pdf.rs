use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;

const UNREADABLE_PDF: &str = "Could not extract text from PDF.";

/// Extracts the text layer of an uploaded PDF.
///
/// Malformed documents (including ones that make the parser panic) are a client
/// error, not a server fault.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, AppError> {
    let outcome =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            Err(AppError::Validation(UNREADABLE_PDF.to_string()))
        }
        Err(e) if e.is_panic() => {
            warn!("PDF parser panicked on upload");
            Err(AppError::Validation(UNREADABLE_PDF.to_string()))
        }
        Err(e) => Err(AppError::Internal(anyhow::anyhow!(
            "PDF extraction task failed: {e}"
        ))),
    }
}

/// True for file names with a `.pdf` extension, any case.
pub fn is_pdf_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_filename_check() {
        assert!(is_pdf_filename("policy.pdf"));
        assert!(is_pdf_filename("POLICY.PDF"));
        assert!(!is_pdf_filename("policy.docx"));
        assert!(!is_pdf_filename("pdf"));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_a_validation_error() {
        let err = extract_pdf_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == UNREADABLE_PDF));
    }
}
