// src/document.rs
//! Document intake: maps uploads to a supported kind and produces the
//! plain text the extractor consumes.
//!
//! The extractor core never sees raw bytes. PDF and DOCX decoding belongs
//! to an external text-conversion service; this build only reads plain
//! text itself and reports binary kinds with a distinct error so the
//! caller can route them.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Result<Self> {
        match mime {
            MIME_PLAIN_TEXT => Ok(DocumentKind::PlainText),
            MIME_PDF => Ok(DocumentKind::Pdf),
            MIME_DOCX => Ok(DocumentKind::Docx),
            other => anyhow::bail!(
                "Unsupported file type: {}. Supported types: TXT, PDF, DOCX",
                other
            ),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", path.display()))?;

        match ext.as_str() {
            "txt" => Ok(DocumentKind::PlainText),
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            other => anyhow::bail!(
                "Unsupported file extension: {}. Supported types: TXT, PDF, DOCX",
                other
            ),
        }
    }
}

/// Load the full decoded text of a document. Binary kinds are delegated to
/// the external converter and fail here with a distinct message; empty
/// documents are rejected at intake (the extractor itself tolerates empty
/// input, but an empty upload is a caller error).
pub fn load_text(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path)?;

    let text = match kind {
        DocumentKind::PlainText => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?,
        DocumentKind::Pdf | DocumentKind::Docx => anyhow::bail!(
            "Failed to decode {}: {:?} decoding is handled by the external text conversion service",
            path.display(),
            kind
        ),
    };

    if text.trim().is_empty() {
        anyhow::bail!("Document is empty: {}", path.display());
    }

    info!(path = %path.display(), bytes = text.len(), "loaded document text");
    Ok(text)
}
