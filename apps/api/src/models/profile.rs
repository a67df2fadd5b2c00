use serde::{Deserialize, Serialize};

/// Resume profile as extracted from an uploaded resume and posted by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    pub summary: Option<String>,
}

impl ResumeProfile {
    /// True when there is nothing a recommendation could be based on.
    pub fn is_empty(&self) -> bool {
        self.skills.iter().all(|s| s.trim().is_empty())
            && self.experience.is_empty()
            && self
                .summary
                .as_deref()
                .map_or(true, |s| s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub role: String,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationRecord {
    pub school: String,
    pub degree: String,
    pub year: Option<String>,
}

/// Job lookup posted to the job-details endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobQuery {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}
