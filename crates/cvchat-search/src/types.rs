use serde::{Deserialize, Serialize};

/// Read-only projection of a resume as stored in the search index.
///
/// Only used to build thread seed context; never persisted locally. Every
/// field defaults so that sparsely indexed documents still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeSummary {
    #[serde(default)]
    pub basic_info: BasicInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<WorkEntry>,
    #[serde(default)]
    pub project_experience: Vec<ProjectEntry>,
    #[serde(default)]
    pub award: Vec<AwardEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub education_level: String,
    #[serde(default)]
    pub gpa: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwardEntry {
    #[serde(default)]
    pub award_name: String,
}
