//! Model Score
//!
//! Turns the trained importance table into a secondary risk score. Each known
//! feature in the table contributes `normalized_importance x contribution`
//! when its value crosses the fixed trigger below. The trigger direction for
//! `is_https` is inverted: missing HTTPS is the risk signal.

use crate::logic::features::UrlFeatures;

use super::weights::TrainedWeights;

// ============================================================================
// TRIGGER TABLE
// ============================================================================

/// Trigger direction for one feature.
#[derive(Debug, Clone, Copy)]
pub enum Trigger {
    Above(f64),
    Below(f64),
}

/// Only the highest-importance entries of the table are consulted.
pub const TOP_FEATURE_LIMIT: usize = 20;

/// (feature name, trigger, fixed contribution). Iterated deterministically;
/// features the table names but this list does not are skipped.
pub const MODEL_TRIGGERS: &[(&str, Trigger, f64)] = &[
    ("is_https", Trigger::Below(0.5), 0.40),
    ("has_ip", Trigger::Above(0.5), 0.60),
    ("is_shortener", Trigger::Above(0.5), 0.50),
    ("suspicious_keyword_count", Trigger::Above(0.0), 0.30),
    ("brand_impersonation", Trigger::Above(0.5), 0.50),
    ("typosquat", Trigger::Above(0.5), 0.40),
    ("suspicious_tld", Trigger::Above(0.5), 0.50),
    ("url_length", Trigger::Above(80.0), 0.20),
    ("dot_count", Trigger::Above(5.0), 0.20),
    ("hyphen_count", Trigger::Above(4.0), 0.20),
    ("at_count", Trigger::Above(0.0), 0.20),
    ("subdomain_count", Trigger::Above(1.0), 0.15),
    ("special_char_ratio", Trigger::Above(0.20), 0.15),
    ("digit_ratio", Trigger::Above(0.35), 0.15),
    ("char_diversity", Trigger::Above(0.85), 0.15),
    ("has_port", Trigger::Above(0.5), 0.25),
    ("query_length", Trigger::Above(50.0), 0.20),
    ("domain_length", Trigger::Above(30.0), 0.15),
    ("path_length", Trigger::Above(60.0), 0.10),
];

// ============================================================================
// SCORING
// ============================================================================

/// Compute the model score in [0, 1].
///
/// Returns `None` when the table is unusable (empty, non-positive
/// importances, or no feature name the trigger table knows) so the caller can
/// fall back to the pure rule score.
pub fn model_score(features: &UrlFeatures, table: &TrainedWeights) -> Option<f64> {
    let top = &table.top_features[..table.top_features.len().min(TOP_FEATURE_LIMIT)];

    let max_importance = top.iter().map(|(_, imp)| *imp).fold(0.0_f64, f64::max);
    if max_importance <= 0.0 {
        return None;
    }

    let mut score = 0.0;
    let mut known = 0usize;

    for (name, importance) in top {
        let Some(value) = features.value(name) else {
            continue;
        };
        let Some((_, trigger, contribution)) =
            MODEL_TRIGGERS.iter().find(|(n, _, _)| *n == name.as_str())
        else {
            continue;
        };
        known += 1;

        let triggered = match trigger {
            Trigger::Above(t) => value > *t,
            Trigger::Below(t) => value < *t,
        };
        if triggered {
            score += (importance / max_importance) * contribution;
        }
    }

    if known == 0 {
        return None;
    }

    Some(score.clamp(0.0, 1.0))
}

// ============================================================================
// TESTS
// ============================================================================
