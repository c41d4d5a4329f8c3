//! Assessment Pipeline
//!
//! End-to-end orchestration for one payload: classify, run the matching
//! branch, bound the external lookup, fuse. Stateless - every call is an
//! independent computation over the read-only weight table.

use std::time::Duration;

use crate::logic::content::{classify_content, ClassifiedContent};
use crate::logic::features::extract_url_features;
use crate::logic::intel::{IntelOutcome, ThreatIntel};
use crate::logic::model::ModelWeights;
use crate::logic::scorer::score_url;
use crate::logic::upi::validate_upi;
use crate::logic::verdict::{fuse_text, fuse_upi, fuse_url, RiskAssessment};

/// Assess one payload. Never fails: collaborator degradation is folded into
/// the checks map and the assessment always completes.
pub async fn assess(
    payload: &str,
    weights: &ModelWeights,
    intel: &dyn ThreatIntel,
    intel_timeout: Duration,
) -> RiskAssessment {
    match classify_content(payload) {
        ClassifiedContent::Text => fuse_text(),
        ClassifiedContent::Upi(uri) => fuse_upi(&validate_upi(&uri)),
        ClassifiedContent::Url(url) => {
            let features = extract_url_features(&url);
            let report = score_url(&features, weights);

            let outcome = match tokio::time::timeout(intel_timeout, intel.check(&url)).await {
                Ok(Ok(verdict)) => IntelOutcome::Verdict(verdict),
                Ok(Err(err)) => {
                    tracing::warn!(%err, "threat intel lookup failed, continuing without it");
                    IntelOutcome::Unavailable
                }
                Err(_) => {
                    tracing::warn!(timeout_ms = intel_timeout.as_millis() as u64,
                        "threat intel lookup timed out, continuing without it");
                    IntelOutcome::Unavailable
                }
            };

            fuse_url(features.is_https, &report, &outcome)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
