pub mod plan;
pub mod survey;

pub use plan::{EnrichedPlan, Plan, RecommendationResult};
pub use survey::SurveyInput;
