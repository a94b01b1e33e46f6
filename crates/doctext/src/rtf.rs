//! RTF cleanup.
//!
//! Not a parser: a sequence of stripping passes that turns simple RTF into
//! readable text. Pass order matters — paragraph markers become newlines
//! before the general control-word strip would swallow them.

use std::sync::LazyLock;

use regex::Regex;

use crate::decode::decode_text;

static HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\'[0-9a-fA-F]{2}").unwrap());
static PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\\par[d]?").unwrap());
static CONTROL_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\[a-zA-Z]+-?\d*\s?").unwrap());

/// Decodes RTF bytes and strips markup.
pub(crate) fn extract_rtf_text(bytes: &[u8]) -> Option<String> {
    let rtf = decode_text(bytes)?;
    if rtf.is_empty() {
        return None;
    }

    let text = HEX_ESCAPE.replace_all(&rtf, "");
    let text = PARAGRAPH.replace_all(&text, "\n");
    let text = CONTROL_WORD.replace_all(&text, "");
    let text = text.replace(['{', '}'], "");
    let text = text.replace("\\\\", "\\");
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let text = extract_rtf_text(br"{\rtf1 \par Hello\par}").unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_pard_becomes_newline() {
        let text = extract_rtf_text(br"{\rtf1 one\pard two}").unwrap();
        assert_eq!(text, "one\ntwo");
    }

    #[test]
    fn test_hex_escapes_removed() {
        let text = extract_rtf_text(br"{\rtf1 caf\'e9 au lait}").unwrap();
        assert_eq!(text, "caf au lait");
    }

    #[test]
    fn test_control_words_with_arguments_removed() {
        let text = extract_rtf_text(br"{\rtf1\ansi\deff0\fs-20 body}").unwrap();
        assert_eq!(text, "body");
    }

    #[test]
    fn test_doubled_backslash_unescaped() {
        // A letter after the doubled backslash would read as a control word;
        // the unescape pass only sees what the control-word strip left.
        let text = extract_rtf_text(br"{\rtf1 C:\\2024}").unwrap();
        assert_eq!(text, r"C:\2024");
    }
}
