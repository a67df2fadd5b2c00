//! Generators — LLM-backed producers of job details and recommendations.
//!
//! `AppState` holds an `Arc<dyn Generator>`. Handlers never call the LLM
//! client directly, so tests can swap in a fake.

use async_trait::async_trait;

use crate::jobs::models::{JobDetails, Recommendations};
use crate::jobs::prompts::{
    JOB_DETAILS_PROMPT_TEMPLATE, JOB_DETAILS_SYSTEM, RECOMMENDATIONS_PROMPT_TEMPLATE,
    RECOMMENDATIONS_SYSTEM,
};
use crate::llm_client::prompts::PROFILE_GROUNDING_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::{JobQuery, ResumeProfile};

/// Produces results that are expensive, paid and non-deterministic.
/// Callers cache the output; implementations must not.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn job_details(&self, query: &JobQuery) -> Result<JobDetails, LlmError>;

    async fn recommendations(
        &self,
        profile: &ResumeProfile,
        keywords: &[String],
    ) -> Result<Recommendations, LlmError>;
}

/// Production generator backed by Claude.
pub struct LlmGenerator(pub LlmClient);

#[async_trait]
impl Generator for LlmGenerator {
    async fn job_details(&self, query: &JobQuery) -> Result<JobDetails, LlmError> {
        let prompt = build_job_details_prompt(query);
        self.0.call_json(&prompt, JOB_DETAILS_SYSTEM).await
    }

    async fn recommendations(
        &self,
        profile: &ResumeProfile,
        keywords: &[String],
    ) -> Result<Recommendations, LlmError> {
        let prompt = build_recommendations_prompt(profile, keywords)?;
        self.0.call_json(&prompt, RECOMMENDATIONS_SYSTEM).await
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none specified".to_string()
    } else {
        items.join(", ")
    }
}

fn build_job_details_prompt(query: &JobQuery) -> String {
    JOB_DETAILS_PROMPT_TEMPLATE
        .replace("{title}", query.title.trim())
        .replace("{company}", query.company.trim())
        .replace(
            "{location}",
            query
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .unwrap_or("unspecified"),
        )
        .replace("{skills}", &list_or_none(&query.skills))
}

fn build_recommendations_prompt(
    profile: &ResumeProfile,
    keywords: &[String],
) -> Result<String, LlmError> {
    let profile_json = serde_json::to_string_pretty(profile)?;
    Ok(RECOMMENDATIONS_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", PROFILE_GROUNDING_INSTRUCTION)
        .replace("{profile_json}", &profile_json)
        .replace("{keywords}", &list_or_none(keywords)))
}
