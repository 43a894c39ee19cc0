// src/extractor/section.rs
//! Section header recognition and the segmenter's state set.

/// The segmenter's states. `None` is the initial state; lines seen before
/// the first recognized header go nowhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Languages,
}

/// Ordered header rules, evaluated top to bottom against the case-folded
/// line; the first matching keyword wins. Keeping this a table makes the
/// priority order visible and testable on its own.
const HEADER_RULES: &[(&[&str], Section)] = &[
    (&["summary", "objective"], Section::Summary),
    (&["experience", "employment"], Section::Experience),
    (&["education"], Section::Education),
    (&["skills", "technical"], Section::Skills),
    (&["certification"], Section::Certifications),
    (&["project"], Section::Projects),
    (&["language"], Section::Languages),
];

/// Headers are short label lines ("EXPERIENCE", "Technical Skills"). Body
/// lines that merely mention a keyword ("Programming Languages: Go, Rust")
/// must not switch sections.
const MAX_HEADER_WORDS: usize = 3;

impl Section {
    /// Recognize a section header line. Returns `None` for body lines.
    pub fn detect(line: &str) -> Option<Section> {
        if line.split_whitespace().count() > MAX_HEADER_WORDS {
            return None;
        }
        let lower = line.to_lowercase();
        HEADER_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|&(_, section)| section)
    }
}

/// Defensive re-check used by accumulators that must not swallow a header
/// lookalike into their records.
pub fn is_section_header(line: &str) -> bool {
    Section::detect(line).is_some()
}
