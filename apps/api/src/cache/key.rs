//! Cache key derivation.
//!
//! Requests are normalized (trimmed, lowercased, order-free collections sorted,
//! missing optionals mapped to `""`), serialized to canonical JSON and hashed
//! with SHA-256. Two requests that differ only in formatting noise map to the
//! same key.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::profile::{EducationRecord, ExperienceRecord, JobQuery, ResumeProfile};

/// Namespace for job-detail lookups.
pub const JOB_DETAILS_PREFIX: &str = "job-details:";
/// Namespace for job recommendations.
pub const RECOMMENDATIONS_PREFIX: &str = "recommendations:";
/// Hex characters kept for short-lived lookup namespaces.
pub const SHORT_KEY_LEN: usize = 16;

// ────────────────────────────────────────────────────────────────────────────
// Normalized request shapes
// ────────────────────────────────────────────────────────────────────────────

/// Field order here is the canonical serialization order. Do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct NormalizedExperience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct NormalizedEducation {
    pub school: String,
    pub degree: String,
    pub year: String,
}

/// A resume profile reduced to the parts that affect generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedProfile {
    pub skills: Vec<String>,
    pub experience: Vec<NormalizedExperience>,
    pub education: Vec<NormalizedEducation>,
    pub summary: String,
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

fn normalize_sorted(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = values.iter().map(|v| normalize(v)).collect();
    out.sort();
    out
}

impl From<&ExperienceRecord> for NormalizedExperience {
    fn from(record: &ExperienceRecord) -> Self {
        Self {
            company: normalize(&record.company),
            role: normalize(&record.role),
            duration: normalize_opt(record.duration.as_deref()),
            description: normalize_opt(record.description.as_deref()),
        }
    }
}

impl From<&EducationRecord> for NormalizedEducation {
    fn from(record: &EducationRecord) -> Self {
        Self {
            school: normalize(&record.school),
            degree: normalize(&record.degree),
            year: normalize_opt(record.year.as_deref()),
        }
    }
}

impl From<&ResumeProfile> for NormalizedProfile {
    fn from(profile: &ResumeProfile) -> Self {
        // Derived `Ord` compares company (school) first, then the rest of the
        // tuple, so entries sharing a company still sort deterministically.
        let mut experience: Vec<NormalizedExperience> =
            profile.experience.iter().map(Into::into).collect();
        experience.sort();

        let mut education: Vec<NormalizedEducation> =
            profile.education.iter().map(Into::into).collect();
        education.sort();

        Self {
            skills: normalize_sorted(&profile.skills),
            experience,
            education,
            summary: normalize_opt(profile.summary.as_deref()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hashing
// ────────────────────────────────────────────────────────────────────────────

fn digest_hex(canonical: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

fn canonical_digest<T: Serialize>(value: &T) -> String {
    // Plain structs of strings always serialize.
    let canonical = serde_json::to_string(value).unwrap_or_default();
    digest_hex(&canonical)
}

/// Full 64-char SHA-256 hex key for a normalized profile.
pub fn generate_key(profile: &NormalizedProfile) -> String {
    canonical_digest(profile)
}

/// Key for an ordered tuple of strings. Each field is trimmed and lowercased;
/// position is significant.
pub fn generate_query_key(fields: &[&str]) -> String {
    let normalized: Vec<String> = fields.iter().map(|f| normalize(f)).collect();
    canonical_digest(&normalized)
}

/// Leading `len` hex characters of a digest. Returns `key` unchanged when it is
/// shorter than `len` or the cut would split a character.
pub fn short_key(key: &str, len: usize) -> &str {
    key.get(..len).unwrap_or(key)
}

impl JobQuery {
    /// `job-details:<16 hex>` over (title, company, location, skills).
    pub fn cache_key(&self) -> String {
        // Skills go in as one canonical JSON array so commas inside a skill
        // cannot shift field boundaries.
        let skills = serde_json::to_string(&normalize_sorted(&self.skills)).unwrap_or_default();
        let digest = generate_query_key(&[
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_deref().unwrap_or_default(),
            skills.as_str(),
        ]);
        format!("{JOB_DETAILS_PREFIX}{}", short_key(&digest, SHORT_KEY_LEN))
    }
}

/// `recommendations:<profile digest>:<16 hex keyword digest>`
///
/// Keywords are treated as a set: normalized and sorted before hashing.
pub fn recommendations_key(profile: &ResumeProfile, keywords: &[String]) -> String {
    let profile_key = generate_key(&NormalizedProfile::from(profile));
    let keyword_digest = canonical_digest(&normalize_sorted(keywords));
    format!(
        "{RECOMMENDATIONS_PREFIX}{profile_key}:{}",
        short_key(&keyword_digest, SHORT_KEY_LEN)
    )
}
