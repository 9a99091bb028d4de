use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single role in the experience section. `id` is caller-supplied and
/// not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// The full resume as submitted by the editor. Saved as a whole; there are
/// no partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

/// Envelope kept in memory and mirrored to `<resumes_dir>/<id>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredResume {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub data: ResumeProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
    pub timestamp: NaiveDateTime,
}
