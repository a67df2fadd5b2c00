// LLM prompt constants for job details and recommendations.
// Reuses the profile grounding fragment from llm_client::prompts.

/// System prompt for job-detail expansion.
pub const JOB_DETAILS_SYSTEM: &str = "You are an experienced technical recruiter. \
    Describe job postings realistically and concisely. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Replace: {title}, {company}, {location}, {skills}
pub const JOB_DETAILS_PROMPT_TEMPLATE: &str = r#"Write a detailed description for the following job.

Title: {title}
Company: {company}
Location: {location}
Key skills: {skills}

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Frontend Engineer",
  "company": "Acme",
  "description": "Two to four sentences on the role and the team.",
  "responsibilities": ["Build and ship UI features"],
  "requirements": ["3+ years React"],
  "benefits": ["Remote-friendly"],
  "salary_range": "$120k - $150k" or null
}

Keep each list to at most 6 items. Use null for salary_range if you cannot estimate it."#;

/// System prompt for job recommendations.
pub const RECOMMENDATIONS_SYSTEM: &str = "You are a career advisor matching candidates to roles. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Replace: {grounding_instruction}, {profile_json}, {keywords}
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

CANDIDATE PROFILE:
{profile_json}

TARGET KEYWORDS (may be empty):
{keywords}

Suggest 5 job roles this candidate is a strong fit for. Return a JSON object:
{
  "recommendations": [
    {
      "title": "Frontend Engineer",
      "company_type": "Series B startup",
      "match_score": 85,
      "reasons": ["Three years of production React"],
      "missing_skills": ["TypeScript"]
    }
  ]
}

match_score is an integer from 0 to 100. Order recommendations by match_score, highest first."#;
