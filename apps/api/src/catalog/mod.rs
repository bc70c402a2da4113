// Static reference data served as-is: survey questions, claim guides, admin stats.

pub mod admin;
pub mod claims;
pub mod handlers;
pub mod survey;
