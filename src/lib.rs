//! Plain-text resume extraction: a heuristic pipeline that turns loosely
//! formatted resume text into a structured professional profile plus a
//! derived seniority analysis.
//!
//! The core entry point is [`extract`]; it is pure, synchronous and total
//! over arbitrary UTF-8 input. Document intake ([`document`]) and the
//! response envelope ([`types::ExtractionResponse`]) are the thin glue
//! around it.

pub mod document;
pub mod extractor;
pub mod types;

pub use extractor::extract;
pub use types::{ExtractionQuality, ExtractionResponse, Profile};

use std::path::Path;

use anyhow::Result;

/// Convenience wrapper: load a document from disk, extract, and wrap the
/// profile in the response envelope.
pub fn process_document(path: &Path) -> Result<ExtractionResponse> {
    let text = document::load_text(path)?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default()
        .to_string();

    let profile = extract(&text, &filename);
    Ok(ExtractionResponse::success(filename, profile))
}
