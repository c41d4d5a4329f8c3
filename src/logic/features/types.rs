//! URL Feature Vector
//!
//! Typed feature set extracted from a single URL. Created once per request,
//! read-only afterwards. The named layout below is the single source of truth
//! for mapping pretrained weight-table entries onto fields.

use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names as they appear in the trained weight table.
/// Order is stable; adding or renaming a feature is a schema change.
pub const FEATURE_LAYOUT: &[&str] = &[
    // === String-level (always computed from the raw URL) ===
    "url_length",
    "dot_count",
    "hyphen_count",
    "underscore_count",
    "slash_count",
    "question_mark_count",
    "equal_count",
    "at_count",
    "and_count",
    "special_char_ratio",
    "digit_ratio",
    "letter_ratio",
    "char_diversity",
    // === Structure (zeroed when the URL does not parse) ===
    "domain_length",
    "path_length",
    "query_length",
    "fragment_length",
    "path_depth",
    "subdomain_count",
    "is_https",
    "has_ip",
    "has_port",
    "has_www",
    // === Reputation ===
    "is_shortener",
    "suspicious_tld",
    "brand_impersonation",
    "typosquat",
    "suspicious_keyword_count",
];

// ============================================================================
// URL FEATURES
// ============================================================================

/// Fixed-shape feature vector for one URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    // String-level
    pub url_length: usize,
    pub dot_count: usize,
    pub hyphen_count: usize,
    pub underscore_count: usize,
    pub slash_count: usize,
    pub question_mark_count: usize,
    pub equal_count: usize,
    pub at_count: usize,
    pub and_count: usize,
    pub special_char_ratio: f64,
    pub digit_ratio: f64,
    pub letter_ratio: f64,
    pub char_diversity: f64,

    // Structure
    pub domain_length: usize,
    pub path_length: usize,
    pub query_length: usize,
    pub fragment_length: usize,
    pub path_depth: usize,
    pub subdomain_count: usize,
    pub is_https: bool,
    pub has_ip: bool,
    pub has_port: bool,
    pub has_www: bool,

    // Reputation
    pub is_shortener: bool,
    pub suspicious_tld: bool,
    pub brand_impersonation: bool,
    pub typosquat: bool,
    pub suspicious_keyword_count: usize,
}

impl UrlFeatures {
    /// Look up a feature by its weight-table name.
    /// Booleans map to 0.0/1.0 so the model blend can threshold uniformly.
    pub fn value(&self, name: &str) -> Option<f64> {
        let v = match name {
            "url_length" => self.url_length as f64,
            "dot_count" => self.dot_count as f64,
            "hyphen_count" => self.hyphen_count as f64,
            "underscore_count" => self.underscore_count as f64,
            "slash_count" => self.slash_count as f64,
            "question_mark_count" => self.question_mark_count as f64,
            "equal_count" => self.equal_count as f64,
            "at_count" => self.at_count as f64,
            "and_count" => self.and_count as f64,
            "special_char_ratio" => self.special_char_ratio,
            "digit_ratio" => self.digit_ratio,
            "letter_ratio" => self.letter_ratio,
            "char_diversity" => self.char_diversity,
            "domain_length" => self.domain_length as f64,
            "path_length" => self.path_length as f64,
            "query_length" => self.query_length as f64,
            "fragment_length" => self.fragment_length as f64,
            "path_depth" => self.path_depth as f64,
            "subdomain_count" => self.subdomain_count as f64,
            "is_https" => self.is_https as u8 as f64,
            "has_ip" => self.has_ip as u8 as f64,
            "has_port" => self.has_port as u8 as f64,
            "has_www" => self.has_www as u8 as f64,
            "is_shortener" => self.is_shortener as u8 as f64,
            "suspicious_tld" => self.suspicious_tld as u8 as f64,
            "brand_impersonation" => self.brand_impersonation as u8 as f64,
            "typosquat" => self.typosquat as u8 as f64,
            "suspicious_keyword_count" => self.suspicious_keyword_count as f64,
            _ => return None,
        };
        Some(v)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_names_resolve() {
        let features = UrlFeatures::default();
        for name in FEATURE_LAYOUT {
            assert!(
                features.value(name).is_some(),
                "layout name {name} has no accessor"
            );
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        let features = UrlFeatures::default();
        assert_eq!(features.value("entropy_v2"), None);
    }

    #[test]
    fn test_bool_maps_to_unit_interval() {
        let features = UrlFeatures {
            is_https: true,
            ..Default::default()
        };
        assert_eq!(features.value("is_https"), Some(1.0));
        assert_eq!(features.value("has_ip"), Some(0.0));
    }
}
