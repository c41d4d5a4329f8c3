//! Threat Intel Types
//!
//! Data structures and errors for the external lookup. No client logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// VERDICT
// ============================================================================

/// Verdict returned by the external threat-intelligence service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntelVerdict {
    /// False when the URL is on a known blocklist
    pub safe: bool,
    /// Threat category reported by the service, when flagged
    pub threat_type: Option<String>,
}

impl IntelVerdict {
    pub fn safe() -> Self {
        Self {
            safe: true,
            threat_type: None,
        }
    }

    pub fn unsafe_with(threat_type: impl Into<String>) -> Self {
        Self {
            safe: false,
            threat_type: Some(threat_type.into()),
        }
    }
}

/// Lookup outcome threaded to verdict fusion. An error never means "unsafe";
/// it degrades to `Unavailable` and the assessment continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntelOutcome {
    Verdict(IntelVerdict),
    Unavailable,
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum IntelError {
    #[error("threat intel API key not configured")]
    NotConfigured,
    #[error("threat intel request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("threat intel returned HTTP {0}")]
    BadStatus(u16),
}
