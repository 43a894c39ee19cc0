// src/extractor/education.rs
//! Education section accumulator, same single-slot discipline as
//! experience.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::EducationEntry;

static GPA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());

#[derive(Debug, Default)]
pub struct EducationAccumulator {
    entries: Vec<EducationEntry>,
    current: Option<EducationEntry>,
}

impl EducationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        // A pipe line or an institution keyword starts a new entry. The
        // keyword match is case-sensitive on purpose.
        if line.contains('|') || line.contains("University") || line.contains("College") {
            self.flush();
            self.current = Some(parse_entry_header(line));
        } else if line.to_lowercase().contains("gpa") {
            if let Some(entry) = self.current.as_mut() {
                if let Some(m) = GPA_RE.find(line) {
                    entry.gpa = m.as_str().to_string();
                }
            }
        }
    }

    pub fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry);
        }
    }

    pub fn finish(mut self) -> Vec<EducationEntry> {
        self.flush();
        self.entries
    }
}

fn parse_entry_header(line: &str) -> EducationEntry {
    if line.contains('|') {
        let mut parts = line.splitn(3, '|').map(str::trim);
        EducationEntry {
            degree: parts.next().unwrap_or("").to_string(),
            institution: parts.next().unwrap_or("").to_string(),
            graduation_date: parts.next().unwrap_or("").to_string(),
            ..EducationEntry::default()
        }
    } else {
        EducationEntry {
            institution: line.to_string(),
            ..EducationEntry::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_header() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("BSc Computer Science | MIT | 2019");
        let entries = acc.finish();
        assert_eq!(entries[0].degree, "BSc Computer Science");
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].graduation_date, "2019");
    }

    #[test]
    fn test_university_line_becomes_institution() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("Stanford University");
        let entries = acc.finish();
        assert_eq!(entries[0].institution, "Stanford University");
        assert_eq!(entries[0].degree, "");
    }

    #[test]
    fn test_gpa_extracted_from_open_entry() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("Stanford University");
        acc.push_line("GPA: 3.8/4.0");
        let entries = acc.finish();
        assert_eq!(entries[0].gpa, "3.8");
    }

    #[test]
    fn test_gpa_without_open_entry_is_ignored() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("gpa 3.9");
        assert!(acc.finish().is_empty());
    }

    #[test]
    fn test_new_header_flushes() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("Springfield College");
        acc.push_line("MSc | ETH | 2021");
        let entries = acc.finish();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "Springfield College");
        assert_eq!(entries[1].institution, "ETH");
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        let mut acc = EducationAccumulator::new();
        acc.push_line("Stanford University");
        acc.push_line("Dean's list");
        let entries = acc.finish();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].gpa, "");
    }
}
