//! UPI Payment-URI Validator
//!
//! Parses `upi://pay?...` style URIs, extracts the payment parameters, and
//! runs format plus content checks. Independent of the URL feature pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::types::UpiValidation;

// ============================================================================
// PATTERNS
// ============================================================================

/// VPA shape: `<local-part>@<handle>` with restricted charsets on both sides.
static VPA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9]+$").expect("VPA pattern must compile")
});

/// Phrases that have no business being in a payee display name.
static SUSPICIOUS_PAYEE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"phish",
        r"urgent.{0,20}payment",
        r"verify.{0,20}account",
        r"lottery|prize|winner",
        r"kyc.{0,12}(update|verify|expir)",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){p}")).expect("payee pattern must compile"))
    .collect()
});

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a payment URI. Infallible: any failure mode lands in `errors`.
pub fn validate_upi(uri: &str) -> UpiValidation {
    let Ok(parsed) = Url::parse(uri.trim()) else {
        return UpiValidation {
            valid: false,
            errors: vec!["Invalid UPI URL format".to_string()],
            ..Default::default()
        };
    };

    let mut result = UpiValidation {
        valid: true,
        ..Default::default()
    };

    for (key, value) in parsed.query_pairs() {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match key.to_ascii_lowercase().as_str() {
            "pa" => result.vpa = Some(value),
            "pn" => result.payee_name = Some(value),
            "am" => result.amount = Some(value),
            "tn" => result.note = Some(value),
            "mc" => result.merchant_code = Some(value),
            _ => {}
        }
    }

    match &result.vpa {
        None => {
            result.valid = false;
            result
                .errors
                .push("Missing required parameter: pa (payee address)".to_string());
        }
        Some(vpa) if !VPA_PATTERN.is_match(vpa) => {
            result.valid = false;
            result.errors.push("Invalid VPA format".to_string());
        }
        Some(_) => {}
    }

    if result.payee_name.is_none() {
        result.valid = false;
        result
            .errors
            .push("Missing required parameter: pn (payee name)".to_string());
    }

    // Content screen runs regardless of the format checks above.
    if let Some(name) = &result.payee_name {
        if SUSPICIOUS_PAYEE_PATTERNS.iter().any(|re| re.is_match(name)) {
            result.valid = false;
            result
                .errors
                .push("Payee name contains suspicious content".to_string());
        }
    }

    result
}

// ============================================================================
// TESTS
// ============================================================================
