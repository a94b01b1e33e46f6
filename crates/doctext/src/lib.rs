//! # kauri-doctext - Document Text Extraction
//!
//! Converts a stored binary document plus its type tag into display text,
//! best-effort: extraction never fails the caller. Unsupported types,
//! undecodable bytes, and parser errors all yield `None`.
//!
//! | Type tag | Strategy |
//! |----------|----------|
//! | TXT, CSV, XML, HTML, HTM, SVG, MHT | UTF-8 decode, UTF-16 LE fallback |
//! | RTF | decode as text, strip control words and group braces |
//! | PDF | per-page text layer via PDFium, artifact cleanup |
//! | images and anything else | no extraction |
//!
//! The RTF path is a cleanup pass, not a full RTF parser; it is good enough
//! for the simple clinical letters the store holds.

mod decode;
mod pdf;
mod rtf;

pub use pdf::clean_extracted_text;

/// Extraction strategy selected by a document's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain-text family: decoded, never parsed.
    PlainText,
    /// Rich Text Format.
    Rtf,
    /// Portable Document Format.
    Pdf,
    /// Images and unrecognized tags; no text extraction attempted.
    Unsupported,
}

impl DocumentKind {
    /// Classifies a type tag, case-insensitively.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.unwrap_or_default().trim().to_ascii_uppercase().as_str() {
            "TXT" | "CSV" | "XML" | "HTML" | "HTM" | "SVG" | "MHT" => DocumentKind::PlainText,
            "RTF" => DocumentKind::Rtf,
            "PDF" => DocumentKind::Pdf,
            _ => DocumentKind::Unsupported,
        }
    }
}

/// Extracts display text from a document payload.
///
/// Returns `None` for empty payloads, unsupported types, and any decode or
/// parse failure.
pub fn extract_text(bytes: &[u8], document_type: Option<&str>) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }

    match DocumentKind::from_tag(document_type) {
        DocumentKind::PlainText => decode::decode_text(bytes),
        DocumentKind::Rtf => rtf::extract_rtf_text(bytes),
        DocumentKind::Pdf => pdf::extract_pdf_text(bytes),
        DocumentKind::Unsupported => None,
    }
}
