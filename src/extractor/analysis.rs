// src/extractor/analysis.rs
//! Seniority and competency signals derived from the finished profile.

use crate::types::{ExperienceLevel, Profile, ProfileAnalysis};

/// Pure read-only pass over the accumulated records; runs once after
/// segmentation completes.
pub fn synthesize(profile: &Profile) -> ProfileAnalysis {
    let experience_level = match profile.experience.len() {
        n if n > 3 => ExperienceLevel::Senior,
        n if n > 1 => ExperienceLevel::Mid,
        _ => ExperienceLevel::Entry,
    };

    let career_progression = if profile.experience.is_empty() {
        "New to workforce".to_string()
    } else {
        "Steady".to_string()
    };

    let leadership_experience = profile.experience.iter().any(|entry| {
        let title = entry.title.to_lowercase();
        let description = entry.description.to_lowercase();
        title.contains("senior")
            || title.contains("lead")
            || description.contains("senior")
            || description.contains("lead")
            || entry
                .achievements
                .iter()
                .any(|a| a.to_lowercase().contains("lead"))
    });

    let remote_work_experience = profile.experience.iter().any(|entry| {
        entry.description.to_lowercase().contains("remote")
            || entry
                .achievements
                .iter()
                .any(|a| a.to_lowercase().contains("remote"))
    });

    let key_strengths = profile.skills.technical.iter().take(3).cloned().collect();

    ProfileAnalysis {
        experience_level,
        career_progression,
        industry_focus: vec!["Technology".to_string(), "Software Development".to_string()],
        key_strengths,
        leadership_experience,
        remote_work_experience,
        // Not derived from anything yet; kept false rather than guessed.
        international_experience: false,
    }
}
