// Policy simplification: PDF text extraction, chunked summaries, plain-language retelling.
// PDF parsing is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod pdf;
pub mod prompts;
pub mod summarize;
