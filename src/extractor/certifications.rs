// src/extractor/certifications.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::section::is_section_header;
use crate::types::Certification;

static CERT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s*\|\s*(.+?)\s*\|\s*(.+)$").unwrap());

#[derive(Debug, Default)]
pub struct CertificationsAccumulator {
    certifications: Vec<Certification>,
}

impl CertificationsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `name | issuer | date` line fills all three fields; anything else
    /// becomes a name-only record. Header repeats are skipped.
    pub fn push_line(&mut self, line: &str) {
        if is_section_header(line) {
            return;
        }

        let cert = match CERT_RE.captures(line) {
            Some(caps) => Certification {
                name: caps[1].to_string(),
                issuer: caps[2].to_string(),
                date: caps[3].to_string(),
            },
            None => Certification {
                name: line.to_string(),
                issuer: String::new(),
                date: String::new(),
            },
        };
        self.certifications.push(cert);
    }

    pub fn finish(self) -> Vec<Certification> {
        self.certifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_part_line() {
        let mut acc = CertificationsAccumulator::new();
        acc.push_line("AWS SAA | Amazon | 2022");
        let certs = acc.finish();
        assert_eq!(certs[0].name, "AWS SAA");
        assert_eq!(certs[0].issuer, "Amazon");
        assert_eq!(certs[0].date, "2022");
    }

    #[test]
    fn test_bare_line_is_name_only() {
        let mut acc = CertificationsAccumulator::new();
        acc.push_line("Some Cert");
        let certs = acc.finish();
        assert_eq!(certs[0].name, "Some Cert");
        assert_eq!(certs[0].issuer, "");
        assert_eq!(certs[0].date, "");
    }

    #[test]
    fn test_header_repeat_skipped() {
        let mut acc = CertificationsAccumulator::new();
        acc.push_line("Certifications");
        acc.push_line("CKA | CNCF | 2023");
        let certs = acc.finish();
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].name, "CKA");
    }

    #[test]
    fn test_two_part_line_falls_back_to_name() {
        let mut acc = CertificationsAccumulator::new();
        acc.push_line("CKA | CNCF");
        let certs = acc.finish();
        assert_eq!(certs[0].name, "CKA | CNCF");
        assert_eq!(certs[0].issuer, "");
    }
}
