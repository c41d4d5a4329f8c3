//! Fixed Signal Lists
//!
//! Static tables used by feature extraction.
//! No extraction logic here - only constants and compiled patterns.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// SUSPICIOUS KEYWORDS
// ============================================================================

/// Keywords that frequently show up in phishing URLs.
/// Counted as distinct case-insensitive substring matches over the full URL.
/// Bare brand names are deliberately absent; brand abuse is caught by the
/// impersonation and typosquat features instead.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "phishing", "malware", "virus", "hack", "steal", "password",
    "account", "verify", "urgent", "limited", "offer", "click",
    "winner", "prize", "free", "gift", "bonus", "promotion",
    "secure", "bank", "update", "confirm", "suspend", "locked",
    "temporary", "login", "signin",
];

// ============================================================================
// URL SHORTENERS
// ============================================================================

/// Known URL shortener hosts. A shortened link hides its destination,
/// so membership alone is a strong signal.
pub const SHORTENER_DOMAINS: &[&str] = &[
    "bit.ly", "tinyurl.com", "goo.gl", "t.co", "short.link",
    "tiny.cc", "lnkd.in", "rebrand.ly", "ow.ly", "buff.ly",
    "is.gd", "v.gd", "x.co", "po.st", "bc.vc",
];

// ============================================================================
// SUSPICIOUS TLDS
// ============================================================================

/// Low-cost / free TLDs with heavy abuse rates. Matched as host suffix.
pub const SUSPICIOUS_TLDS: &[&str] = &[
    ".tk", ".ml", ".ga", ".cf", ".gq",
    ".xyz", ".top", ".club", ".work", ".click",
];

// ============================================================================
// BRAND TABLE
// ============================================================================

/// (brand substring, canonical domain). A host containing the brand name
/// without ending in the canonical domain is flagged as impersonation.
pub const BRANDS: &[(&str, &str)] = &[
    ("paypal", "paypal.com"),
    ("amazon", "amazon.com"),
    ("google", "google.com"),
    ("microsoft", "microsoft.com"),
    ("apple", "apple.com"),
    ("netflix", "netflix.com"),
    ("facebook", "facebook.com"),
    ("whatsapp", "whatsapp.com"),
];

// ============================================================================
// TYPOSQUAT PATTERNS
// ============================================================================

/// Leetspeak shapes of the brand names above. A match only counts as a
/// typosquat when the matched text actually contains a digit substitution,
/// otherwise the legitimate spelling would match too.
pub static TYPOSQUAT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"g[o0]{2}g[l1]e",
        r"payp[a4][l1]",
        r"amaz[o0]n",
        r"micr[o0]s[o0]ft",
        r"faceb[o0]{2}k",
        r"app[l1]e",
        r"netf[l1]ix",
        r"whats[a4]pp",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("typosquat pattern must compile"))
    .collect()
});

/// True when `host` matches a typosquat shape with a real digit substitution.
pub fn matches_typosquat(host: &str) -> bool {
    TYPOSQUAT_PATTERNS.iter().any(|re| {
        re.find(host)
            .map(|m| m.as_str().chars().any(|c| c.is_ascii_digit()))
            .unwrap_or(false)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typosquat_requires_digit() {
        assert!(matches_typosquat("g00gle-login.com"));
        assert!(matches_typosquat("paypa1.example.com"));
        // Legitimate spellings never count
        assert!(!matches_typosquat("google.com"));
        assert!(!matches_typosquat("paypal.com"));
    }

    #[test]
    fn test_lists_non_empty() {
        assert!(!SUSPICIOUS_KEYWORDS.is_empty());
        assert!(!SHORTENER_DOMAINS.is_empty());
        assert!(!SUSPICIOUS_TLDS.is_empty());
        assert!(!BRANDS.is_empty());
        assert_eq!(TYPOSQUAT_PATTERNS.len(), BRANDS.len());
    }
}
