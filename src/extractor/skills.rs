// src/extractor/skills.rs
//! Skills section accumulator with category routing.

use crate::extractor::experience::strip_bullet;
use crate::types::SkillSet;

/// Target bucket inside [`SkillSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Technical,
    Programming,
    Frameworks,
    Databases,
    Cloud,
    Tools,
}

/// Ordered routing rules for category labels, first match wins. "language"
/// routing to Programming before anything else is literal original
/// behavior (so "Languages: English" lands in `programming`).
const CATEGORY_RULES: &[(&[&str], SkillCategory)] = &[
    (&["programming", "language"], SkillCategory::Programming),
    (&["framework", "library"], SkillCategory::Frameworks),
    (&["database"], SkillCategory::Databases),
    (&["cloud", "aws", "azure"], SkillCategory::Cloud),
    (&["tool"], SkillCategory::Tools),
];

pub fn route_category(label: &str) -> SkillCategory {
    let lower = label.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|&(_, category)| category)
        .unwrap_or(SkillCategory::Technical)
}

#[derive(Debug, Default)]
pub struct SkillsAccumulator {
    skills: SkillSet,
}

impl SkillsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        let line = strip_bullet(line).unwrap_or(line);

        let (category, list) = match line.split_once(':') {
            Some((label, rest)) => (route_category(label), rest),
            None => (SkillCategory::Technical, line),
        };

        let bucket = self.bucket_mut(category);
        bucket.extend(
            list.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        );
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.skills.technical,
            SkillCategory::Programming => &mut self.skills.programming,
            SkillCategory::Frameworks => &mut self.skills.frameworks,
            SkillCategory::Databases => &mut self.skills.databases,
            SkillCategory::Cloud => &mut self.skills.cloud,
            SkillCategory::Tools => &mut self.skills.tools,
        }
    }

    pub fn finish(self) -> SkillSet {
        self.skills
    }
}
