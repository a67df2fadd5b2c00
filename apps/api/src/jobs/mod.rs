// Job details and job recommendations.
// Both are LLM generations served through the result cache; see service.rs.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod service;
