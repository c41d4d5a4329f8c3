//! Verdict Types
//!
//! Externally visible classification types. No fusion logic here.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::logic::content::ContentType;
use crate::logic::scorer::Severity;

// ============================================================================
// VERDICT
// ============================================================================

/// Final trust classification for a scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Nothing flagged, follow the link / pay with confidence
    Safe,
    /// At least one signal flagged, user should look twice
    Suspicious,
    /// Known-bad or heavily flagged, block by default
    Malicious,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Suspicious => "suspicious",
            Verdict::Malicious => "malicious",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CHECKS (audit trail)
// ============================================================================

/// Tri-state outcome of one check. Serialized as `true` / `false` / `null`
/// so clients can distinguish "passed", "failed", and "did not run".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    Pass,
    Fail,
    /// External dependency errored, or the check does not apply to this branch
    #[default]
    Unavailable,
}

impl Serialize for CheckState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckState::Pass => serializer.serialize_bool(true),
            CheckState::Fail => serializer.serialize_bool(false),
            CheckState::Unavailable => serializer.serialize_none(),
        }
    }
}

impl CheckState {
    pub fn from_bool(pass: bool) -> Self {
        if pass {
            CheckState::Pass
        } else {
            CheckState::Fail
        }
    }
}

/// Per-request audit map: records what each check saw, independent of the
/// narrative status. All four keys are always present on the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checks {
    pub https_protocol: CheckState,
    pub safe_browsing: CheckState,
    pub smart_analyzer: CheckState,
    pub upi_format: CheckState,
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// Per-branch scoring detail attached to the assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub reason: String,
    pub risk_score: f64,
    pub ml_model_used: bool,
    pub severity: Severity,
    pub details: serde_json::Value,
}

/// Final fused result returned to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub status: Verdict,
    pub content_type: ContentType,
    pub threat_type: Option<String>,
    pub checks: Checks,
    pub confidence: f64,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_state_wire_shape() {
        let checks = Checks {
            https_protocol: CheckState::Pass,
            safe_browsing: CheckState::Unavailable,
            smart_analyzer: CheckState::Fail,
            upi_format: CheckState::Unavailable,
        };
        let json = serde_json::to_value(&checks).unwrap();
        assert_eq!(json["httpsProtocol"], serde_json::json!(true));
        assert_eq!(json["safeBrowsing"], serde_json::Value::Null);
        assert_eq!(json["smartAnalyzer"], serde_json::json!(false));
        assert_eq!(json["upiFormat"], serde_json::Value::Null);
    }

    #[test]
    fn test_verdict_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Verdict::Malicious).unwrap(),
            "\"malicious\""
        );
    }
}
