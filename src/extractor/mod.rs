// src/extractor/mod.rs
//! Heuristic resume-text extraction pipeline.
//!
//! Deterministic and rule-based: accuracy is bounded by how closely the
//! input follows common resume conventions (labeled sections,
//! "Title | Company | Dates" lines, bullet-prefixed achievements). Total
//! over arbitrary UTF-8 input; malformed text yields a mostly-empty
//! profile, never an error.

pub mod analysis;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod lines;
pub mod section;
pub mod skills;

use tracing::debug;

use crate::types::Profile;
use certifications::CertificationsAccumulator;
use education::EducationAccumulator;
use experience::ExperienceAccumulator;
use section::{is_section_header, Section};
use skills::SkillsAccumulator;

/// Extract a structured profile from plain resume text.
///
/// `filename` takes no part in any parsing rule; it is accepted for
/// forward compatibility and caller-side logging. The function is pure
/// and keeps no state between calls, so concurrent use needs no
/// synchronization.
pub fn extract(text: &str, filename: &str) -> Profile {
    let lines = lines::normalize_lines(text);
    debug!(filename, line_count = lines.len(), "extracting resume text");

    let personal_info = contact::extract_personal_info(&lines);

    let mut state = Section::None;
    let mut summary = String::new();
    let mut experience = ExperienceAccumulator::new();
    let mut education = EducationAccumulator::new();
    let mut skills = SkillsAccumulator::new();
    let mut certifications = CertificationsAccumulator::new();
    let mut projects: Vec<String> = Vec::new();
    let mut languages: Vec<String> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        // Header lines switch state and are consumed here.
        if let Some(next_state) = Section::detect(line) {
            state = next_state;
            continue;
        }

        match state {
            Section::None => {}
            Section::Summary => {
                if !is_section_header(line) {
                    if !summary.is_empty() {
                        summary.push(' ');
                    }
                    summary.push_str(line);
                }
            }
            Section::Experience => {
                let next_line = lines.get(index + 1).copied();
                experience.push_line(line, next_line);
            }
            Section::Education => education.push_line(line),
            Section::Skills => skills.push_line(line),
            Section::Certifications => certifications.push_line(line),
            Section::Projects => projects.push(line.to_string()),
            Section::Languages => languages.push(line.to_string()),
        }
    }

    let mut profile = Profile {
        personal_info,
        summary,
        experience: experience.finish(),
        education: education.finish(),
        skills: skills.finish(),
        certifications: certifications.finish(),
        projects,
        languages,
        ..Profile::default()
    };

    profile.analysis = analysis::synthesize(&profile);
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExperienceLevel;

    const SAMPLE: &str = "\
Jane Doe
jane@x.com
(555) 123-4567
linkedin: janedoe

SUMMARY
Backend engineer with a decade of shipping.

EXPERIENCE
Senior Engineer | Acme | 2020-2024
Owned the billing platform, remote-first team.
- Led migration to event sourcing
Engineer | Beta | 2016-2020
- Shipped X

EDUCATION
BSc Computer Science | State University | 2016
GPA: 3.8/4.0

SKILLS
Programming Languages: Go, Rust
Python, Docker

CERTIFICATIONS
AWS SAA | Amazon | 2022
Some Cert

PROJECTS
homelab orchestrator

LANGUAGES
English, French
";

    #[test]
    fn test_full_pipeline() {
        let profile = extract(SAMPLE, "jane.txt");

        assert_eq!(profile.personal_info.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.personal_info.email.as_deref(), Some("jane@x.com"));
        assert!(profile.personal_info.phone.is_some());
        assert_eq!(
            profile.personal_info.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );

        assert_eq!(profile.summary, "Backend engineer with a decade of shipping.");

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Senior Engineer");
        assert_eq!(profile.experience[0].company, "Acme");
        assert_eq!(profile.experience[0].duration, "2020-2024");
        assert_eq!(
            profile.experience[0].achievements,
            vec!["Led migration to event sourcing"]
        );
        assert_eq!(profile.experience[1].achievements, vec!["Shipped X"]);

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].institution, "State University");
        assert_eq!(profile.education[0].gpa, "3.8");

        assert_eq!(profile.skills.programming, vec!["Go", "Rust"]);
        assert_eq!(profile.skills.technical, vec!["Python", "Docker"]);

        assert_eq!(profile.certifications.len(), 2);
        assert_eq!(profile.certifications[0].issuer, "Amazon");
        assert_eq!(profile.certifications[1].name, "Some Cert");
        assert_eq!(profile.certifications[1].issuer, "");

        assert_eq!(profile.projects, vec!["homelab orchestrator"]);
        assert_eq!(profile.languages, vec!["English, French"]);

        assert_eq!(profile.analysis.experience_level, ExperienceLevel::Mid);
        assert!(profile.analysis.leadership_experience);
        assert!(profile.analysis.remote_work_experience);
        assert_eq!(profile.analysis.key_strengths, vec!["Python", "Docker"]);
    }

    #[test]
    fn test_empty_input_yields_default_profile() {
        let profile = extract("", "empty.txt");
        assert!(profile.personal_info.name.is_none());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.analysis.experience_level, ExperienceLevel::Entry);
        assert_eq!(profile.analysis.career_progression, "New to workforce");
    }

    #[test]
    fn test_total_over_garbage_input() {
        let garbage = "\u{0}\u{fffd}¤¶\nλλλ | ωωω | ϕϕϕ\n:::\n|||\n";
        let profile = extract(garbage, "garbage.bin");
        // Never panics; whatever parses, parses.
        let _ = serde_json::to_string(&profile).unwrap();
    }

    #[test]
    fn test_idempotent() {
        let a = extract(SAMPLE, "jane.txt");
        let b = extract(SAMPLE, "jane.txt");
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_header_lines_are_consumed() {
        let profile = extract(SAMPLE, "jane.txt");
        assert!(!profile.summary.contains("SUMMARY"));
        for entry in &profile.experience {
            assert!(!entry.description.contains("EXPERIENCE"));
        }
    }

    #[test]
    fn test_lines_before_first_header_go_nowhere() {
        let text = "Jane Doe\nfreestanding preamble line\nEXPERIENCE\nEngineer | Acme | 2020";
        let profile = extract(text, "x.txt");
        assert_eq!(profile.summary, "");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].description, "");
    }

    #[test]
    fn test_four_entries_is_senior() {
        let text = "EXPERIENCE\n\
            A | W | 1\nB | X | 2\nC | Y | 3\nD | Z | 4";
        let profile = extract(text, "x.txt");
        assert_eq!(profile.experience.len(), 4);
        assert_eq!(profile.analysis.experience_level, ExperienceLevel::Senior);
    }

    #[test]
    fn test_in_progress_entry_flushed_at_end_of_input() {
        let text = "EXPERIENCE\nEngineer | Acme | 2020\nstill describing the role";
        let profile = extract(text, "x.txt");
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].description, "still describing the role");
    }
}
