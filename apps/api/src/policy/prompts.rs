// Prompt constants for policy simplification.

/// Per-chunk summary prompt. Replace `{chunk}` before sending.
pub const CHUNK_SUMMARY_PROMPT: &str = "Summarize the following insurance policy text \
    in simple, clear language for rural India. Avoid jargon.\n\nText:\n{chunk}";

/// Plain-language retelling prompt. Replace `{summary}` before sending.
pub const ELI5_PROMPT: &str = "Explain the following insurance policy summary as if I am \
    5 years old, using rural Indian language and examples. Avoid jargon.\n\nSummary:\n{summary}";
