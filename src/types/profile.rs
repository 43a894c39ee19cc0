// src/types/profile.rs
//! Structured profile record produced by the resume extractor

use serde::{Deserialize, Serialize};

/// Root output of an extraction run. Every field tolerates being empty so
/// a partial parse is always representable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: SkillSet,
    pub certifications: Vec<Certification>,
    pub projects: Vec<String>,
    pub languages: Vec<String>,
    pub analysis: ProfileAnalysis,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// Free-text date range, not parsed into dates
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
    /// Never populated by the current parser (no source feeds it)
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub graduation_date: String,
    /// Never populated by the current parser
    pub field: String,
    pub gpa: String,
}

/// Skills grouped into fixed category buckets. Duplicates are kept and
/// insertion order is preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub programming: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub cloud: Vec<String>,
    pub tools: Vec<String>,
    /// No routing rule targets this bucket; it stays empty
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Derived signals computed once after segmentation completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub experience_level: ExperienceLevel,
    pub career_progression: String,
    pub industry_focus: Vec<String>,
    pub key_strengths: Vec<String>,
    pub leadership_experience: bool,
    pub remote_work_experience: bool,
    /// Not computed upstream; always false
    pub international_experience: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    Entry,
    Mid,
    Senior,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
        };
        write!(f, "{}", label)
    }
}
