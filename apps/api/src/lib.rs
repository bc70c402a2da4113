//! Bima Sahayak API: insurance guidance for rural users.
//!
//! The core is a rule-based plan recommender (`recommend::engine`) with an
//! optional LLM refinement stage (`recommend::refiner`) that always degrades to
//! a local heuristic. Everything else is thin HTTP glue over static data, form
//! checks and PDF policy summarization.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod form;
pub mod llm_client;
pub mod models;
pub mod policy;
pub mod recommend;
pub mod routes;
pub mod state;
