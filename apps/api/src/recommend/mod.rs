// Plan recommendation: deterministic rule engine plus optional LLM refinement.
// The engine has no I/O and is usable without the refiner.

pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod refiner;
pub mod rules;

pub use engine::RuleEngine;
pub use refiner::{Refinement, RefinementSource, Refiner};
pub use rules::RuleTable;
