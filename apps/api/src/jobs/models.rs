use serde::{Deserialize, Serialize};

use crate::models::profile::ResumeProfile;

/// Expanded description of a single job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub salary_range: Option<String>,
}

/// One suggested role for a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub company_type: Option<String>,
    /// 0 – 100
    pub match_score: u8,
    #[serde(default)]
    pub reasons: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

/// Envelope the model is asked to return for recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub recommendations: Vec<JobRecommendation>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub profile: ResumeProfile,
    /// Keywords pulled from the candidate's keyword match, if any.
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JobDetailsResponse {
    pub details: JobDetails,
    pub cached: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<JobRecommendation>,
    pub cached: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_details_tolerates_missing_lists() {
        let details: JobDetails = serde_json::from_str(
            r#"{
                "title": "Frontend Engineer",
                "company": "Acme",
                "description": "Build the web app.",
                "salary_range": null
            }"#,
        )
        .unwrap();
        assert!(details.responsibilities.is_empty());
        assert!(details.salary_range.is_none());
    }

    #[test]
    fn test_recommendations_deserialize() {
        let parsed: Recommendations = serde_json::from_str(
            r#"{
                "recommendations": [
                    {
                        "title": "Frontend Engineer",
                        "company_type": "Startup",
                        "match_score": 88,
                        "reasons": ["React experience"],
                        "missing_skills": ["TypeScript"]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.recommendations.len(), 1);
        assert_eq!(parsed.recommendations[0].match_score, 88);
        assert_eq!(parsed.recommendations[0].missing_skills, vec!["TypeScript"]);
    }

    #[test]
    fn test_match_score_out_of_range_is_rejected() {
        let result = serde_json::from_str::<JobRecommendation>(
            r#"{"title": "X", "company_type": null, "match_score": 300}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_recommendations_request_keywords_default_empty() {
        let req: RecommendationsRequest =
            serde_json::from_str(r#"{"profile": {"skills": ["Rust"]}}"#).unwrap();
        assert!(req.keywords.is_empty());
        assert_eq!(req.profile.skills, vec!["Rust"]);
    }
}
