// src/extractor/experience.rs
//! Experience section accumulator.
//!
//! Entries are built in a single-slot holder and only move into the output
//! list when the next entry header arrives or input ends, so the
//! finalize-on-boundary rule is an explicit, testable `flush`.

use crate::types::ExperienceEntry;

#[derive(Debug, Default)]
pub struct ExperienceAccumulator {
    entries: Vec<ExperienceEntry>,
    current: Option<ExperienceEntry>,
}

impl ExperienceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one body line. `next_line` is the segmenter's one-line peek:
    /// a plain, non-bullet line immediately followed by a pipe line also
    /// counts as an entry header (title only). Bullets are claimed before
    /// the lookahead so the last achievement of an entry is not mistaken
    /// for the next entry's title line.
    pub fn push_line(&mut self, line: &str, next_line: Option<&str>) {
        if line.contains('|') {
            self.flush();
            self.current = Some(parse_entry_header(line));
        } else if let Some(rest) = strip_bullet(line) {
            if let Some(entry) = self.current.as_mut() {
                entry.achievements.push(rest.to_string());
            }
        } else if next_line.map_or(false, |next| next.contains('|')) {
            self.flush();
            self.current = Some(parse_entry_header(line));
        } else if let Some(entry) = self.current.as_mut() {
            if !entry.description.is_empty() {
                entry.description.push(' ');
            }
            entry.description.push_str(line);
        }
    }

    /// Move the in-progress entry into the output list, if any.
    pub fn flush(&mut self) {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry);
        }
    }

    pub fn finish(mut self) -> Vec<ExperienceEntry> {
        self.flush();
        self.entries
    }
}

/// Split a header line on `|` into up to three fields; missing parts stay
/// empty.
fn parse_entry_header(line: &str) -> ExperienceEntry {
    let mut parts = line.splitn(3, '|').map(str::trim);
    ExperienceEntry {
        title: parts.next().unwrap_or("").to_string(),
        company: parts.next().unwrap_or("").to_string(),
        duration: parts.next().unwrap_or("").to_string(),
        ..ExperienceEntry::default()
    }
}

/// Strip a leading `•` or `-` achievement marker.
pub fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix('•')
        .or_else(|| line.strip_prefix('-'))
        .map(str::trim)
}
