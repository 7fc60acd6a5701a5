const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Emoji flag for a two-letter ISO code, built from regional indicator
/// symbols. Returns `None` for anything that is not two ASCII letters.
pub fn flag_glyph(iso_code: &str) -> Option<String> {
    let bytes = iso_code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    bytes
        .iter()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b.to_ascii_uppercase() - b'A')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_flag_from_iso_code() {
        assert_eq!(flag_glyph("TR").as_deref(), Some("🇹🇷"));
        assert_eq!(flag_glyph("gb").as_deref(), Some("🇬🇧"));
    }

    #[test]
    fn malformed_codes_have_no_glyph() {
        assert_eq!(flag_glyph(""), None);
        assert_eq!(flag_glyph("T"), None);
        assert_eq!(flag_glyph("TUR"), None);
        assert_eq!(flag_glyph("T1"), None);
        assert_eq!(flag_glyph("ÄÖ"), None);
    }

    #[test]
    fn every_directory_entry_renders() {
        for entry in crate::country::COUNTRIES {
            assert!(entry.flag().is_some(), "{}", entry.iso_code);
        }
    }
}
