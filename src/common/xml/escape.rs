use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// the five predefined entities, replaced in one pass
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters for use in text content and attribute values.
///
/// # Examples
///
/// ```
/// use figdeck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("fig<1>'s \"raw\".png"), "fig&lt;1&gt;&apos;s &quot;raw&quot;.png");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_xml("sample_01.png"), "sample_01.png");
        assert_eq!(escape_xml(""), "");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }
}
