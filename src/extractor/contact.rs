// src/extractor/contact.rs
//! Contact data scan over the top of the document.
//!
//! Resumes front-load contact details, so only the first ten normalized
//! lines are examined. Each field is assigned unconditionally on every
//! matching line, so the last match inside the window wins. That mirrors
//! the original service and is covered by a regression test; do not switch
//! to first-match-wins without a product decision.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::PersonalInfo;

const SCAN_WINDOW: usize = 10;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

// North-American style: optional +1, optional parens around the area code,
// separators -, . or space.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

static LINKEDIN_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^linkedin:\s*").unwrap());
static GITHUB_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^github:\s*").unwrap());

const LINKEDIN_HOST: &str = "https://linkedin.com/in/";
const GITHUB_HOST: &str = "https://github.com/";

/// Extract name/email/phone/LinkedIn/GitHub from the first
/// `min(10, lines.len())` lines.
pub fn extract_personal_info(lines: &[&str]) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    for (index, line) in lines.iter().take(SCAN_WINDOW).enumerate() {
        // The very first line is the name candidate when it looks like one.
        if index == 0 && !line.contains('@') && !line.contains('(') && line.len() > 2 {
            info.name = Some(line.to_string());
        }

        if let Some(m) = EMAIL_RE.find(line) {
            info.email = Some(m.as_str().to_string());
        }

        if let Some(m) = PHONE_RE.find(line) {
            info.phone = Some(m.as_str().to_string());
        }

        let lower = line.to_lowercase();
        if lower.contains("linkedin") {
            info.linkedin_url = Some(profile_url(line, &LINKEDIN_LABEL_RE, LINKEDIN_HOST));
        }
        if lower.contains("github") {
            info.github_url = Some(profile_url(line, &GITHUB_LABEL_RE, GITHUB_HOST));
        }
    }

    info
}

/// A line already carrying a URL is taken verbatim; otherwise the label
/// prefix is stripped and the remainder appended to the canonical host.
fn profile_url(line: &str, label: &Regex, host: &str) -> String {
    if line.contains("http") {
        line.to_string()
    } else {
        let handle = label.replace(line, "");
        format!("{}{}", host, handle.trim())
    }
}
