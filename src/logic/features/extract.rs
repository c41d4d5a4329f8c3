//! URL Feature Extraction
//!
//! Pure function from a normalized URL string to a [`UrlFeatures`] vector.
//! Never fails: string-level features are always computed directly from the
//! raw string, and a URL that does not parse simply leaves every
//! structure-derived feature at its zero/false default.

use url::{Host, Url};

use super::lists::{
    matches_typosquat, BRANDS, SHORTENER_DOMAINS, SUSPICIOUS_KEYWORDS, SUSPICIOUS_TLDS,
};
use super::types::UrlFeatures;

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the full feature vector for one URL.
pub fn extract_url_features(url: &str) -> UrlFeatures {
    let mut features = UrlFeatures::default();

    extract_string_features(url, &mut features);

    if let Ok(parsed) = Url::parse(url) {
        extract_structure_features(&parsed, &mut features);
        if let Some(host) = parsed.host_str() {
            extract_reputation_features(&host.to_lowercase(), &mut features);
        }
    }

    // Keyword scan runs over the whole URL, not just the host,
    // so it survives parse failures too.
    let url_lower = url.to_lowercase();
    features.suspicious_keyword_count = SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|kw| url_lower.contains(*kw))
        .count();
    features.has_www = url_lower.contains("www.");

    features
}

/// Character-level features, computed from the raw string.
fn extract_string_features(url: &str, features: &mut UrlFeatures) {
    let len = url.chars().count();
    features.url_length = len;
    features.dot_count = url.matches('.').count();
    features.hyphen_count = url.matches('-').count();
    features.underscore_count = url.matches('_').count();
    features.slash_count = url.matches('/').count();
    features.question_mark_count = url.matches('?').count();
    features.equal_count = url.matches('=').count();
    features.at_count = url.matches('@').count();
    features.and_count = url.matches('&').count();

    if len == 0 {
        return;
    }

    let digit_count = url.chars().filter(|c| c.is_ascii_digit()).count();
    let letter_count = url.chars().filter(|c| c.is_alphabetic()).count();
    let special_count = len - digit_count - letter_count;

    let unique_chars = {
        let mut chars: Vec<char> = url.to_lowercase().chars().collect();
        chars.sort_unstable();
        chars.dedup();
        chars.len()
    };

    features.digit_ratio = digit_count as f64 / len as f64;
    features.letter_ratio = letter_count as f64 / len as f64;
    features.special_char_ratio = special_count as f64 / len as f64;
    features.char_diversity = unique_chars as f64 / len as f64;
}

/// Features derived from the parsed URL structure.
fn extract_structure_features(parsed: &Url, features: &mut UrlFeatures) {
    features.is_https = parsed.scheme() == "https";
    features.domain_length = parsed.host_str().map(str::len).unwrap_or(0);
    features.path_length = parsed.path().len();
    features.query_length = parsed.query().map(str::len).unwrap_or(0);
    features.fragment_length = parsed.fragment().map(str::len).unwrap_or(0);
    features.path_depth = parsed
        .path()
        .split('/')
        .filter(|seg| !seg.is_empty())
        .count();

    // Url::port() is None when the port equals the scheme default.
    features.has_port = parsed.port().is_some();

    match parsed.host() {
        Some(Host::Ipv4(_)) => {
            features.has_ip = true;
        }
        Some(Host::Domain(domain)) => {
            // Labels beyond registrable-domain + TLD count as subdomains.
            let labels = domain.split('.').filter(|l| !l.is_empty()).count();
            features.subdomain_count = labels.saturating_sub(2);
        }
        _ => {}
    }
}

/// Reputation lookups against the fixed lists. `host` must be lowercase.
fn extract_reputation_features(host: &str, features: &mut UrlFeatures) {
    features.is_shortener = SHORTENER_DOMAINS
        .iter()
        .any(|d| host == *d || host.ends_with(&format!(".{d}")));

    features.suspicious_tld = SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld));

    features.brand_impersonation = BRANDS.iter().any(|(brand, canonical)| {
        host.contains(brand) && host != *canonical && !host.ends_with(&format!(".{canonical}"))
    });

    features.typosquat = matches_typosquat(host);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_https_url() {
        let f = extract_url_features("https://google.com");
        assert!(f.is_https);
        assert!(!f.has_ip);
        assert!(!f.is_shortener);
        assert!(!f.brand_impersonation);
        assert_eq!(f.subdomain_count, 0);
        assert_eq!(f.dot_count, 1);
        assert_eq!(f.suspicious_keyword_count, 0);
    }

    #[test]
    fn test_ip_host() {
        let f = extract_url_features("http://192.168.1.1/login?verify=account");
        assert!(f.has_ip);
        assert!(!f.is_https);
        assert_eq!(f.subdomain_count, 0);
        // login, verify, account
        assert_eq!(f.suspicious_keyword_count, 3);
    }

    #[test]
    fn test_malformed_url_zeroes_structure() {
        let f = extract_url_features("not a url at all");
        assert_eq!(f.domain_length, 0);
        assert_eq!(f.path_length, 0);
        assert_eq!(f.query_length, 0);
        assert_eq!(f.fragment_length, 0);
        assert_eq!(f.subdomain_count, 0);
        assert!(!f.has_ip);
        assert!(!f.has_port);
        assert!(!f.is_https);
        // String features still computed
        assert_eq!(f.url_length, 16);
        assert!(f.char_diversity > 0.0);
    }

    #[test]
    fn test_subdomain_count() {
        let f = extract_url_features("https://a.b.c.example.com");
        assert_eq!(f.subdomain_count, 3);
    }

    #[test]
    fn test_non_default_port() {
        assert!(extract_url_features("http://example.com:8080").has_port);
        assert!(!extract_url_features("http://example.com:80").has_port);
        assert!(!extract_url_features("https://example.com:443").has_port);
    }

    #[test]
    fn test_shortener_and_tld() {
        assert!(extract_url_features("https://bit.ly/abc123").is_shortener);
        assert!(extract_url_features("http://login-update.tk").suspicious_tld);
    }

    #[test]
    fn test_brand_impersonation() {
        let f = extract_url_features("https://paypal-secure.example.com/verify");
        assert!(f.brand_impersonation);
        let clean = extract_url_features("https://www.paypal.com/signin");
        assert!(!clean.brand_impersonation);
    }

    #[test]
    fn test_typosquat() {
        assert!(extract_url_features("https://g00gle.com").typosquat);
        assert!(!extract_url_features("https://google.com").typosquat);
    }

    #[test]
    fn test_ratios_sum_to_one() {
        let f = extract_url_features("https://example.com/a1b2");
        let sum = f.digit_ratio + f.letter_ratio + f.special_char_ratio;
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
