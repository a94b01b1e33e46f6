//! PDF text-layer extraction.
//!
//! Reads the embedded text of each page via PDFium (no rendering, no OCR),
//! joins pages with blank-line separation, and post-processes the result:
//! scanned forms leave behind underscore rules and excess blank lines that
//! are useless for display.

use std::sync::LazyLock;

use pdfium_render::prelude::*;
use regex::Regex;
use tracing::debug;

static UNDERSCORE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^_+$").unwrap());
static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Extracts and cleans the text layer of a PDF payload.
///
/// Any failure — missing PDFium library, corrupt or encrypted document,
/// pages without a text layer — yields `None`.
pub(crate) fn extract_pdf_text(bytes: &[u8]) -> Option<String> {
    let combined = read_pages(bytes)?;
    clean_extracted_text(&combined)
}

fn read_pages(bytes: &[u8]) -> Option<String> {
    let bindings = match Pdfium::bind_to_system_library() {
        Ok(bindings) => bindings,
        Err(err) => {
            debug!(error = %err, "PDFium library unavailable; skipping PDF extraction");
            return None;
        }
    };
    let pdfium = Pdfium::new(bindings);
    let document = match pdfium.load_pdf_from_byte_slice(bytes, None) {
        Ok(document) => document,
        Err(err) => {
            debug!(error = %err, "failed to load PDF payload");
            return None;
        }
    };

    let mut combined = String::new();
    for page in document.pages().iter() {
        let text = page.text().map(|t| t.all()).unwrap_or_default();
        if !text.trim().is_empty() {
            combined.push_str(&text);
            combined.push('\n');
        }
    }
    (!combined.trim().is_empty()).then_some(combined)
}

/// Post-processes extracted page text.
///
/// Removes lines consisting only of underscores, collapses runs of three or
/// more newlines to exactly one blank line, and trims. Returns `None` when
/// nothing readable remains.
pub fn clean_extracted_text(text: &str) -> Option<String> {
    let cleaned = UNDERSCORE_LINE.replace_all(text, "");
    let cleaned = NEWLINE_RUNS.replace_all(&cleaned, "\n\n");
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
