//! Risk Scorer
//!
//! Applies the weighted rule table to a feature vector and optionally blends
//! the pretrained model score. Deterministic and explainable: every triggered
//! rule appends a reason fragment in the fixed order below.

use crate::logic::features::UrlFeatures;
use crate::logic::model::{model_score, ModelWeights};

use super::rules::*;
use super::types::{RiskReport, Severity};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Score a URL's feature vector.
///
/// Rule contributions are additive and clamped to [0, 1]. When a weight table
/// is loaded the final score is `0.3 x rule + 0.7 x model`; a table that turns
/// out to be unusable degrades silently to the pure rule score.
pub fn score_url(features: &UrlFeatures, weights: &ModelWeights) -> RiskReport {
    let (rule_score, reasons) = rule_score(features);

    let (blended, ml_used) = match weights {
        ModelWeights::Absent => (rule_score, false),
        ModelWeights::Loaded(table) => match model_score(features, table) {
            Some(model) => (
                RULE_BLEND_WEIGHT * rule_score + MODEL_BLEND_WEIGHT * model,
                true,
            ),
            None => {
                tracing::warn!("weight table unusable, falling back to rule score");
                (rule_score, false)
            }
        },
    };

    let risk_score = blended.clamp(0.0, 1.0);
    let severity = Severity::from_score(risk_score);
    let is_suspicious = risk_score > SUSPICIOUS_THRESHOLD;
    let confidence = (risk_score + CONFIDENCE_MARGIN).min(1.0);

    let reason = if reasons.is_empty() {
        NO_TRIGGER_REASON.to_string()
    } else {
        reasons.join("; ")
    };

    RiskReport {
        risk_score,
        severity,
        confidence,
        reason,
        ml_used,
        is_suspicious,
    }
}

// ============================================================================
// RULE ACCUMULATION
// ============================================================================

/// Apply every rule in fixed order. Returns the unclamped sum and the
/// triggered reason fragments.
fn rule_score(f: &UrlFeatures) -> (f64, Vec<String>) {
    fn hit(score: &mut f64, weight: f64, reasons: &mut Vec<String>, msg: String) {
        *score += weight;
        reasons.push(msg);
    }

    let mut score = 0.0;
    let mut reasons = Vec::new();

    if !f.is_https {
        hit(&mut score, W_NO_HTTPS, &mut reasons, "Not using HTTPS".to_string());
    }

    if f.url_length > LENGTH_VERY_LONG {
        hit(&mut score, W_LENGTH_VERY_LONG, &mut reasons, "URL is unusually long".to_string());
    } else if f.url_length > LENGTH_LONG {
        hit(&mut score, W_LENGTH_LONG, &mut reasons, "URL is long".to_string());
    } else if f.url_length < LENGTH_SHORT {
        hit(&mut score, W_LENGTH_SHORT, &mut reasons, "URL is unusually short".to_string());
    }

    if f.has_ip {
        hit(&mut score, W_IP_HOST, &mut reasons, "Host is a raw IP address".to_string());
    }

    if f.is_shortener {
        hit(&mut score, W_SHORTENER, &mut reasons, "Known URL shortener".to_string());
    }

    if f.suspicious_keyword_count > KEYWORDS_MANY {
        hit(&mut score, W_KEYWORDS_MANY, &mut reasons,
            format!("{} suspicious keywords found", f.suspicious_keyword_count));
    } else if f.suspicious_keyword_count > 0 {
        hit(&mut score, W_KEYWORDS_SOME, &mut reasons,
            format!("{} suspicious keyword(s) found", f.suspicious_keyword_count));
    }

    if f.brand_impersonation {
        hit(&mut score, W_BRAND_IMPERSONATION, &mut reasons, "Possible brand impersonation".to_string());
    }

    if f.typosquat {
        hit(&mut score, W_TYPOSQUAT, &mut reasons, "Typosquatting pattern detected".to_string());
    }

    if f.special_char_ratio > SPECIAL_RATIO_HIGH {
        hit(&mut score, W_SPECIAL_RATIO_HIGH, &mut reasons, "Very high special character ratio".to_string());
    } else if f.special_char_ratio > SPECIAL_RATIO_MED {
        hit(&mut score, W_SPECIAL_RATIO_MED, &mut reasons, "High special character ratio".to_string());
    }

    if f.subdomain_count > SUBDOMAINS_MANY {
        hit(&mut score, W_SUBDOMAINS_MANY, &mut reasons, "Excessive subdomains".to_string());
    } else if f.subdomain_count > SUBDOMAINS_SOME {
        hit(&mut score, W_SUBDOMAINS_SOME, &mut reasons, "Multiple subdomains".to_string());
    }

    if f.has_port {
        hit(&mut score, W_NON_DEFAULT_PORT, &mut reasons, "Non-standard port".to_string());
    }

    if f.suspicious_tld {
        hit(&mut score, W_SUSPICIOUS_TLD, &mut reasons, "Suspicious top-level domain".to_string());
    }

    if f.dot_count > DOTS_MAX {
        hit(&mut score, W_MANY_DOTS, &mut reasons, "Excessive dots in URL".to_string());
    }

    if f.hyphen_count > HYPHENS_MAX {
        hit(&mut score, W_MANY_HYPHENS, &mut reasons, "Excessive hyphens in URL".to_string());
    }

    if f.char_diversity > DIVERSITY_HIGH || f.char_diversity < DIVERSITY_LOW {
        hit(&mut score, W_ABNORMAL_DIVERSITY, &mut reasons, "Abnormal character diversity".to_string());
    }

    if f.digit_ratio > DIGIT_RATIO_MAX {
        hit(&mut score, W_HIGH_DIGIT_RATIO, &mut reasons, "High digit ratio".to_string());
    }

    if f.query_length > QUERY_LENGTH_MAX {
        hit(&mut score, W_LONG_QUERY, &mut reasons, "Unusually long query string".to_string());
    }

    (score, reasons)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::extract_url_features;
    use crate::logic::model::TrainedWeights;

    fn score_rules(url: &str) -> RiskReport {
        score_url(&extract_url_features(url), &ModelWeights::Absent)
    }

    #[test]
    fn test_clean_url_is_low() {
        let report = score_rules("https://google.com");
        assert!(!report.is_suspicious);
        assert_eq!(report.severity, Severity::Low);
        assert!(!report.ml_used);
        assert!(report.risk_score < SUSPICIOUS_THRESHOLD);
    }

    #[test]
    fn test_ip_http_keywords_is_high() {
        // no-HTTPS (0.40) + IP host (0.60) + 3 keywords (0.50) + more
        let report = score_rules("http://192.168.1.1/login?verify=account");
        assert!(report.is_suspicious);
        assert_eq!(report.severity, Severity::High);
        assert!(report.reason.contains("Not using HTTPS"));
        assert!(report.reason.contains("Host is a raw IP address"));
        assert!(report.reason.contains("suspicious keywords"));
    }

    #[test]
    fn test_score_always_clamped() {
        let report = score_rules(
            "http://g00gle.paypal-verify-login-update-secure.a.b.c.d.bank.tk:8088/x?q=aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        );
        assert!(report.risk_score <= 1.0);
        assert!(report.confidence <= 1.0);
        assert_eq!(report.severity, Severity::High);
    }

    #[test]
    fn test_no_trigger_reason() {
        let report = score_rules("https://example12.com");
        assert_eq!(report.risk_score, 0.0);
        assert_eq!(report.reason, NO_TRIGGER_REASON);
    }

    #[test]
    fn test_confidence_margin() {
        let report = score_rules("https://google.com");
        assert!((report.confidence - (report.risk_score + CONFIDENCE_MARGIN)).abs() < 1e-9);
    }

    #[test]
    fn test_monotonicity_dropping_https() {
        let secure = score_rules("https://example-site.com/page");
        let insecure = score_rules("http://example-site.com/page");
        assert!(insecure.risk_score >= secure.risk_score);
    }

    #[test]
    fn test_blend_uses_model() {
        let features = extract_url_features("http://192.168.1.1/login?verify=account");
        let table = TrainedWeights {
            model_type: "RandomForest".to_string(),
            feature_count: 2,
            top_features: vec![
                ("has_ip".to_string(), 0.5),
                ("is_https".to_string(), 0.5),
            ],
        };
        let report = score_url(&features, &ModelWeights::Loaded(table));
        assert!(report.ml_used);
        assert!(report.risk_score <= 1.0);
        assert!(report.is_suspicious);
    }

    #[test]
    fn test_unusable_table_falls_back() {
        let features = extract_url_features("https://google.com");
        let table = TrainedWeights {
            model_type: "RandomForest".to_string(),
            feature_count: 0,
            top_features: vec![],
        };
        let with_table = score_url(&features, &ModelWeights::Loaded(table));
        let without = score_url(&features, &ModelWeights::Absent);
        assert!(!with_table.ml_used);
        assert_eq!(with_table.risk_score, without.risk_score);
    }
}
