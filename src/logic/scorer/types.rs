//! Scorer Types
//!
//! Core types for risk scoring. No scoring logic - data structures only.

use serde::{Deserialize, Serialize};

use super::rules::{HIGH_THRESHOLD, SUSPICIOUS_THRESHOLD};

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity band derived from the continuous risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Score in the benign band, no action needed
    Low,
    /// Worth flagging to the user
    Medium,
    /// Strong enough to treat as malicious
    High,
}

impl Severity {
    /// Fixed thresholds: high > 0.7, medium > 0.4, else low.
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_THRESHOLD {
            Severity::High
        } else if score > SUSPICIOUS_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK REPORT
// ============================================================================

/// Output of one scoring pass over a feature vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    /// Final risk score, always clamped to [0, 1]
    pub risk_score: f64,
    /// Band derived from the score
    pub severity: Severity,
    /// min(risk_score + margin, 1.0)
    pub confidence: f64,
    /// Triggered rule fragments joined with "; "
    pub reason: String,
    /// Whether the pretrained weight table was blended in
    pub ml_used: bool,
    /// risk_score > the suspicious threshold
    pub is_suspicious: bool,
}

// ============================================================================
// TESTS
// ============================================================================
