// Application form assistance: required-field and Aadhaar checks.

pub mod assist;
pub mod handlers;
