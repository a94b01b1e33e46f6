//! Text decoding for the plain-text document family.

/// Decodes bytes as UTF-8, falling back to UTF-16 LE.
///
/// The store predates consistent encodings: most text documents are UTF-8,
/// but some were written by Windows tooling as UTF-16. Bytes that decode as
/// neither yield `None`.
pub(crate) fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(strip_bom(text).to_string());
    }
    decode_utf16_le(bytes)
}

fn decode_utf16_le(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .ok()
        .map(|text| strip_bom(&text).to_string())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        assert_eq!(decode_text(b"hello").as_deref(), Some("hello"));
    }

    #[test]
    fn test_utf16_le_fallback() {
        let mut bytes = vec![0xFF, 0xFE]; // BOM
        for unit in "hello".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode_text(&bytes).as_deref(), Some("hello"));
    }

    #[test]
    fn test_undecodable_bytes_yield_none() {
        // Invalid UTF-8 with an odd length cannot be UTF-16 either.
        assert_eq!(decode_text(&[0xC0, 0x80, 0xFF]), None);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let bytes = [0xEF, 0xBB, 0xBF, b'h', b'i'];
        assert_eq!(decode_text(&bytes).as_deref(), Some("hi"));
    }
}
