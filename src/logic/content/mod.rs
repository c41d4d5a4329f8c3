//! Content Classifier
//!
//! Decides what a scanned payload actually is - a payment URI, a URL
//! (possibly embedded in surrounding text), or plain text - and routes it
//! to the matching branch. Pure function: every input yields a content type,
//! worst case `text`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// CONTENT TYPE
// ============================================================================

/// Derived once per request, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Upi,
    Url,
    Text,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Upi => "upi",
            ContentType::Url => "url",
            ContentType::Text => "text",
        }
    }
}

/// Classification outcome. URL and UPI variants carry the extracted payload
/// so downstream branches never re-derive it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedContent {
    /// Payment URI, starting at the scheme match
    Upi(String),
    /// Normalized URL string
    Url(String),
    /// Neither - plain text
    Text,
}

impl ClassifiedContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            ClassifiedContent::Upi(_) => ContentType::Upi,
            ClassifiedContent::Url(_) => ContentType::Url,
            ClassifiedContent::Text => ContentType::Text,
        }
    }
}

// ============================================================================
// PATTERNS
// ============================================================================

/// Payment scheme prefixes, matched case-insensitively anywhere in the text.
pub const PAYMENT_SCHEMES: &[&str] = &[
    "upi://pay?",
    "paytm://",
    "phonepe://",
    "gpay://",
    "tez://pay?",
];

/// Embedded URL: explicit scheme or a bare `www.` token.
static EMBEDDED_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:(?:https?|ftp)://[^\s<>"']+|www\.[^\s<>"']+)"#)
        .expect("embedded URL pattern must compile")
});

/// Punctuation commonly glued onto the end of a pasted link.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '"', '\''];

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a raw payload. Side-effect free; never fails.
pub fn classify_content(raw: &str) -> ClassifiedContent {
    let text = raw.trim();
    let lower = text.to_lowercase();

    // Payment URIs win over everything else.
    for scheme in PAYMENT_SCHEMES {
        if let Some(pos) = lower.find(scheme) {
            // Lowercasing preserves byte offsets for ASCII payloads; fall
            // back to the lowercased text when it does not.
            let tail = text.get(pos..).unwrap_or(&lower[pos..]);
            let uri = tail.split_whitespace().next().unwrap_or(tail);
            return ClassifiedContent::Upi(uri.to_string());
        }
    }

    // A single token that parses as an absolute URL is taken as-is.
    if !text.is_empty()
        && !text.contains(char::is_whitespace)
        && Url::parse(text).is_ok()
    {
        return ClassifiedContent::Url(text.to_string());
    }

    // Otherwise hunt for a URL embedded in surrounding text.
    if let Some(m) = EMBEDDED_URL.find(text) {
        let candidate = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        let normalized = if candidate.to_lowercase().starts_with("www.") {
            format!("http://{candidate}")
        } else {
            candidate.to_string()
        };
        return ClassifiedContent::Url(normalized);
    }

    ClassifiedContent::Text
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(classify_content("just some plain text"), ClassifiedContent::Text);
        assert_eq!(classify_content(""), ClassifiedContent::Text);
    }

    #[test]
    fn test_direct_url() {
        let c = classify_content("https://example.com/path?q=1");
        assert_eq!(c, ClassifiedContent::Url("https://example.com/path?q=1".to_string()));
        assert_eq!(c.content_type(), ContentType::Url);
    }

    #[test]
    fn test_payment_uri() {
        let c = classify_content("upi://pay?pa=merchant@bank&pn=Store");
        assert_eq!(c.content_type(), ContentType::Upi);
    }

    #[test]
    fn test_payment_uri_case_insensitive_and_embedded() {
        let c = classify_content("Pay here: UPI://PAY?pa=m@bank&pn=Store thanks");
        match c {
            ClassifiedContent::Upi(uri) => assert!(uri.to_lowercase().starts_with("upi://pay?")),
            other => panic!("expected upi, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_url_with_trailing_punctuation() {
        let c = classify_content("check this out: https://example.com/offer, seriously");
        assert_eq!(c, ClassifiedContent::Url("https://example.com/offer".to_string()));
    }

    #[test]
    fn test_bare_www_is_normalized() {
        let c = classify_content("visit www.example.com today");
        assert_eq!(c, ClassifiedContent::Url("http://www.example.com".to_string()));
    }

    #[test]
    fn test_ftp_url() {
        let c = classify_content("grab it from ftp://files.example.com/pub");
        assert_eq!(c, ClassifiedContent::Url("ftp://files.example.com/pub".to_string()));
    }
}
