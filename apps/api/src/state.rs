use std::sync::Arc;
use std::time::Duration;

use crate::llm_client::TextGenerator;
use crate::recommend::{Refiner, RuleEngine, RuleTable};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text-generation backend. `LlmClient` in production, stubs in tests.
    pub llm: Arc<dyn TextGenerator>,
    pub engine: Arc<RuleEngine>,
    pub refiner: Refiner,
}

impl AppState {
    pub fn new(llm: Arc<dyn TextGenerator>, rules: RuleTable, refine_timeout: Duration) -> Self {
        Self {
            refiner: Refiner::new(llm.clone(), refine_timeout),
            engine: Arc::new(RuleEngine::new(rules)),
            llm,
        }
    }
}
