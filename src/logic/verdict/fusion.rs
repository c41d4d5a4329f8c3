//! Verdict Fusion
//!
//! Merges the per-branch signal and the external threat-intel result into one
//! final assessment. Precedence rules run in fixed order; a malicious verdict
//! from a higher-precedence signal is never downgraded by a later one.

use serde_json::json;

use crate::logic::content::ContentType;
use crate::logic::intel::{IntelOutcome, DEFAULT_THREAT_TYPE};
use crate::logic::scorer::{RiskReport, Severity};
use crate::logic::upi::UpiValidation;

use super::types::{Analysis, CheckState, Checks, RiskAssessment, Verdict};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Fixed reason for the plain-text branch.
pub const TEXT_REASON: &str = "Plain text content - no URL detected";

/// Provisional reason for plain http URLs.
pub const HTTP_INSECURE_REASON: &str = "Insecure HTTP protocol";

pub const SOURCE_CONTENT: &str = "content_classifier";
pub const SOURCE_UPI: &str = "upi_validator";
pub const SOURCE_PROTOCOL: &str = "protocol_check";
pub const SOURCE_INTEL: &str = "threat_intel";
pub const SOURCE_SCORER: &str = "risk_scorer";

const TEXT_CONFIDENCE: f64 = 0.5;
const UPI_INVALID_CONFIDENCE: f64 = 0.7;
const UPI_VALID_CONFIDENCE: f64 = 0.9;
const HTTP_INSECURE_CONFIDENCE: f64 = 0.45;
const INTEL_CONFIDENCE: f64 = 0.95;

// ============================================================================
// TEXT BRANCH
// ============================================================================

/// Plain text never carries a link to follow, so it is always safe.
pub fn fuse_text() -> RiskAssessment {
    RiskAssessment {
        status: Verdict::Safe,
        content_type: ContentType::Text,
        threat_type: None,
        checks: Checks::default(),
        confidence: TEXT_CONFIDENCE,
        source: SOURCE_CONTENT.to_string(),
        analysis: Some(Analysis {
            reason: TEXT_REASON.to_string(),
            risk_score: 0.0,
            ml_model_used: false,
            severity: Severity::Low,
            details: serde_json::Value::Null,
        }),
    }
}

// ============================================================================
// UPI BRANCH
// ============================================================================

/// Payment URIs are judged solely by the validator.
pub fn fuse_upi(validation: &UpiValidation) -> RiskAssessment {
    let checks = Checks {
        upi_format: CheckState::from_bool(validation.valid),
        ..Checks::default()
    };

    let (status, confidence, reason) = if validation.valid {
        (
            Verdict::Safe,
            UPI_VALID_CONFIDENCE,
            "Valid UPI payment details".to_string(),
        )
    } else {
        (
            Verdict::Suspicious,
            UPI_INVALID_CONFIDENCE,
            validation
                .first_error()
                .unwrap_or("Invalid UPI payment details")
                .to_string(),
        )
    };

    RiskAssessment {
        status,
        content_type: ContentType::Upi,
        threat_type: None,
        checks,
        confidence,
        source: SOURCE_UPI.to_string(),
        analysis: Some(Analysis {
            reason,
            risk_score: 0.0,
            ml_model_used: false,
            severity: if validation.valid {
                Severity::Low
            } else {
                Severity::Medium
            },
            details: serde_json::to_value(validation).unwrap_or(serde_json::Value::Null),
        }),
    }
}

// ============================================================================
// URL BRANCH
// ============================================================================

/// Combine the protocol check, the threat-intel lookup, and the risk scorer.
///
/// The scorer always contributes, even after an intel hit: it can escalate a
/// provisional `suspicious`, and its reason is appended for explainability
/// when it cannot change the status anymore.
pub fn fuse_url(is_https: bool, report: &RiskReport, intel: &IntelOutcome) -> RiskAssessment {
    let mut checks = Checks::default();
    let mut status = Verdict::Safe;
    let mut confidence = TEXT_CONFIDENCE;
    let mut source = SOURCE_PROTOCOL;
    let mut reason: Option<String> = None;
    let mut threat_type: Option<String> = None;

    // (a) Protocol check - provisional, later steps may override.
    checks.https_protocol = CheckState::from_bool(is_https);
    if !is_https {
        status = Verdict::Suspicious;
        confidence = HTTP_INSECURE_CONFIDENCE;
        reason = Some(HTTP_INSECURE_REASON.to_string());
    }

    // (b) Threat intel - a blocklist hit overrides unconditionally.
    match intel {
        IntelOutcome::Unavailable => checks.safe_browsing = CheckState::Unavailable,
        IntelOutcome::Verdict(v) if v.safe => checks.safe_browsing = CheckState::Pass,
        IntelOutcome::Verdict(v) => {
            checks.safe_browsing = CheckState::Fail;
            let label = v
                .threat_type
                .clone()
                .unwrap_or_else(|| DEFAULT_THREAT_TYPE.to_string());
            status = Verdict::Malicious;
            confidence = INTEL_CONFIDENCE;
            source = SOURCE_INTEL;
            reason = Some(label.clone());
            threat_type = Some(label);
        }
    }

    // (c) Risk scorer - always runs for combined signal.
    checks.smart_analyzer = CheckState::from_bool(!report.is_suspicious);
    if report.is_suspicious {
        let scorer_status = if report.severity == Severity::High {
            Verdict::Malicious
        } else {
            Verdict::Suspicious
        };

        match status {
            Verdict::Safe => {
                status = scorer_status;
                confidence = report.confidence;
                source = SOURCE_SCORER;
                reason = Some(report.reason.clone());
            }
            Verdict::Suspicious if report.severity == Severity::High => {
                status = Verdict::Malicious;
                confidence = report.confidence;
                source = SOURCE_SCORER;
                reason = Some(report.reason.clone());
            }
            _ => {
                // Status is settled; keep it but fold in the scorer's view.
                reason = Some(match reason.take() {
                    Some(r) if r.contains(&report.reason) => r,
                    Some(r) => format!("{r}; {}", report.reason),
                    None => report.reason.clone(),
                });
                confidence = confidence.max(report.confidence);
            }
        }
    } else if status == Verdict::Safe {
        // (d) Nothing flagged: keep "safe" but report a meaningful score.
        confidence = report.confidence;
    }

    let reason = reason.unwrap_or_else(|| report.reason.clone());

    RiskAssessment {
        status,
        content_type: ContentType::Url,
        threat_type,
        checks,
        confidence,
        source: source.to_string(),
        analysis: Some(Analysis {
            reason,
            risk_score: report.risk_score,
            ml_model_used: report.ml_used,
            severity: report.severity,
            details: json!({ "isSuspicious": report.is_suspicious }),
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::intel::IntelVerdict;
    use crate::logic::upi::validate_upi;

    fn report(score: f64, reason: &str) -> RiskReport {
        RiskReport {
            risk_score: score,
            severity: Severity::from_score(score),
            confidence: (score + 0.15).min(1.0),
            reason: reason.to_string(),
            ml_used: false,
            is_suspicious: score > 0.4,
        }
    }

    #[test]
    fn test_text_is_always_safe() {
        let a = fuse_text();
        assert_eq!(a.status, Verdict::Safe);
        assert_eq!(a.confidence, 0.5);
        assert_eq!(a.analysis.unwrap().reason, TEXT_REASON);
    }

    #[test]
    fn test_valid_upi_is_safe() {
        let a = fuse_upi(&validate_upi("upi://pay?pa=merchant@bank&pn=Store"));
        assert_eq!(a.status, Verdict::Safe);
        assert_eq!(a.confidence, 0.9);
        assert_eq!(a.checks.upi_format, CheckState::Pass);
    }

    #[test]
    fn test_invalid_upi_is_suspicious() {
        let a = fuse_upi(&validate_upi("upi://pay?pn=Store"));
        assert_eq!(a.status, Verdict::Suspicious);
        assert_eq!(a.confidence, 0.7);
        assert_eq!(a.checks.upi_format, CheckState::Fail);
        assert!(a.analysis.unwrap().reason.contains("pa"));
    }

    #[test]
    fn test_clean_https_url_is_safe() {
        let r = report(0.0, "No suspicious patterns detected");
        let a = fuse_url(true, &r, &IntelOutcome::Verdict(IntelVerdict::safe()));
        assert_eq!(a.status, Verdict::Safe);
        assert_eq!(a.checks.https_protocol, CheckState::Pass);
        assert_eq!(a.checks.safe_browsing, CheckState::Pass);
        // Safe path adopts the scorer's confidence
        assert!((a.confidence - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_http_alone_is_provisional_suspicious() {
        let r = report(0.0, "No suspicious patterns detected");
        let a = fuse_url(false, &r, &IntelOutcome::Verdict(IntelVerdict::safe()));
        assert_eq!(a.status, Verdict::Suspicious);
        assert_eq!(a.confidence, 0.45);
        assert_eq!(a.source, SOURCE_PROTOCOL);
    }

    #[test]
    fn test_intel_hit_is_always_malicious() {
        // Even with a zero-score report the blocklist wins.
        let r = report(0.0, "No suspicious patterns detected");
        let a = fuse_url(
            true,
            &r,
            &IntelOutcome::Verdict(IntelVerdict::unsafe_with("MALWARE")),
        );
        assert_eq!(a.status, Verdict::Malicious);
        assert_eq!(a.threat_type.as_deref(), Some("MALWARE"));
        assert_eq!(a.source, SOURCE_INTEL);
        assert_eq!(a.confidence, 0.95);
    }

    #[test]
    fn test_intel_hit_without_type_uses_default() {
        let r = report(0.0, "No suspicious patterns detected");
        let v = IntelVerdict {
            safe: false,
            threat_type: None,
        };
        let a = fuse_url(true, &r, &IntelOutcome::Verdict(v));
        assert_eq!(a.threat_type.as_deref(), Some(DEFAULT_THREAT_TYPE));
    }

    #[test]
    fn test_scorer_escalates_provisional_suspicious() {
        let r = report(0.9, "Host is a raw IP address");
        let a = fuse_url(false, &r, &IntelOutcome::Verdict(IntelVerdict::safe()));
        assert_eq!(a.status, Verdict::Malicious);
        assert_eq!(a.source, SOURCE_SCORER);
    }

    #[test]
    fn test_scorer_appends_to_settled_malicious() {
        let r = report(0.9, "Host is a raw IP address");
        let a = fuse_url(
            true,
            &r,
            &IntelOutcome::Verdict(IntelVerdict::unsafe_with("MALWARE")),
        );
        // Intel verdict stays; scorer reason is folded in
        assert_eq!(a.status, Verdict::Malicious);
        assert_eq!(a.source, SOURCE_INTEL);
        let analysis = a.analysis.unwrap();
        assert!(analysis.reason.contains("MALWARE"));
        assert!(analysis.reason.contains("Host is a raw IP address"));
        assert!((a.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_medium_scorer_does_not_escalate_provisional() {
        let r = report(0.5, "Known URL shortener");
        let a = fuse_url(false, &r, &IntelOutcome::Verdict(IntelVerdict::safe()));
        assert_eq!(a.status, Verdict::Suspicious);
        // Reason appended, confidence takes the max
        let analysis = a.analysis.unwrap();
        assert!(analysis.reason.contains(HTTP_INSECURE_REASON));
        assert!(analysis.reason.contains("Known URL shortener"));
        assert!((a.confidence - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_intel_unavailable_still_completes() {
        let r = report(0.9, "Host is a raw IP address");
        let a = fuse_url(false, &r, &IntelOutcome::Unavailable);
        assert_eq!(a.checks.safe_browsing, CheckState::Unavailable);
        assert_eq!(a.status, Verdict::Malicious);
        assert_eq!(a.source, SOURCE_SCORER);
    }
}
