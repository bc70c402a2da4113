//! Policy summarization: per-chunk LLM summaries, then one plain-language pass.
//!
//! Each LLM call degrades to a placeholder on failure, so a summary is always
//! produced even when the text generator is down or unconfigured.

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::prompts::ADVISOR_SYSTEM;
use crate::llm_client::TextGenerator;
use crate::policy::prompts::{CHUNK_SUMMARY_PROMPT, ELI5_PROMPT};

/// Characters of policy text per summary call.
pub const CHUNK_SIZE: usize = 1500;

pub const SUMMARY_UNAVAILABLE: &str = "[Summary unavailable]";
pub const ELI5_UNAVAILABLE: &str = "[ELI5 explanation unavailable]";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySummary {
    pub summary: String,
    pub eli5: String,
}

/// Splits text into consecutive chunks of at most `size` characters.
pub fn chunk_text(text: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size.max(1))
        .map(|c| c.iter().collect())
        .collect()
}

pub async fn summarize_policy(llm: &dyn TextGenerator, text: &str) -> PolicySummary {
    let chunks = chunk_text(text, CHUNK_SIZE);
    info!("Summarizing policy text in {} chunks", chunks.len());

    let mut summaries = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        let prompt = CHUNK_SUMMARY_PROMPT.replace("{chunk}", chunk);
        let summary = match llm.complete(&prompt, ADVISOR_SYSTEM).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary of chunk {} failed: {e}", i + 1);
                SUMMARY_UNAVAILABLE.to_string()
            }
        };
        summaries.push(summary);
    }
    let summary = summaries.join("\n");

    let prompt = ELI5_PROMPT.replace("{summary}", &summary);
    let eli5 = match llm.complete(&prompt, ADVISOR_SYSTEM).await {
        Ok(eli5) => eli5,
        Err(e) => {
            warn!("Plain-language explanation failed: {e}");
            ELI5_UNAVAILABLE.to_string()
        }
    };

    PolicySummary { summary, eli5 }
}
