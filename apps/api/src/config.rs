use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::Provider;

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: without an API key the service runs with
/// heuristic-only recommendation refinement.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm: LlmConfig,
    /// Optional JSON file overriding the built-in recommendation rule table.
    pub rules_path: Option<PathBuf>,
}

/// Settings for the external text-generation service.
///
/// `api_key == None` is the "unset credential" state: the client reports itself
/// as unconfigured and callers skip the network entirely.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Config with no credential. Every completion fails fast with `MissingApiKey`.
    pub fn unconfigured(provider: Provider) -> Self {
        Self {
            provider,
            api_key: None,
            model: provider.default_model().to_string(),
            timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
        }
    }
}

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider = match optional_env("LLM_PROVIDER") {
            Some(raw) => raw.parse::<Provider>()?,
            None => Provider::OpenAi,
        };

        let api_key = match provider {
            Provider::OpenAi => optional_env("OPENAI_API_KEY"),
            Provider::Groq => optional_env("GROQ_API_KEY"),
        };

        let timeout_secs = match optional_env("LLM_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("LLM_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            port: match optional_env("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            llm: LlmConfig {
                provider,
                api_key,
                model: optional_env("LLM_MODEL")
                    .unwrap_or_else(|| provider.default_model().to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            rules_path: optional_env("RULES_PATH").map(PathBuf::from),
        })
    }
}

/// Reads an env var, treating blank values the same as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
