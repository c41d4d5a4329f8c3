//! Risk Scoring Rules & Thresholds
//!
//! All weights and cutoffs for the rule-based scorer.
//! No scoring logic here - constants only.

// ============================================================================
// VERDICT THRESHOLDS
// ============================================================================

/// Above this score the severity band is high.
pub const HIGH_THRESHOLD: f64 = 0.7;

/// Above this score the URL is flagged suspicious. The medium-severity band
/// starts at the same cutoff on purpose; both read this single constant.
pub const SUSPICIOUS_THRESHOLD: f64 = 0.4;

/// Confidence = min(score + margin, 1.0).
pub const CONFIDENCE_MARGIN: f64 = 0.15;

// ============================================================================
// MODEL BLEND
// ============================================================================

/// Rule-score share when a weight table is loaded.
pub const RULE_BLEND_WEIGHT: f64 = 0.3;

/// Model-score share when a weight table is loaded.
pub const MODEL_BLEND_WEIGHT: f64 = 0.7;

// ============================================================================
// RULE CONTRIBUTIONS (additive, then clamped to [0, 1])
// ============================================================================

/// Plain HTTP instead of HTTPS.
pub const W_NO_HTTPS: f64 = 0.40;

/// URL length tiers.
pub const W_LENGTH_VERY_LONG: f64 = 0.30; // > 150
pub const W_LENGTH_LONG: f64 = 0.20; // > 80
pub const W_LENGTH_SHORT: f64 = 0.15; // < 15

/// Host is a literal IPv4 address.
pub const W_IP_HOST: f64 = 0.60;

/// Host belongs to a known URL shortener.
pub const W_SHORTENER: f64 = 0.50;

/// Suspicious keyword tiers.
pub const W_KEYWORDS_MANY: f64 = 0.50; // > 2 distinct
pub const W_KEYWORDS_SOME: f64 = 0.30; // > 0 distinct

/// Brand name without the brand's canonical domain.
pub const W_BRAND_IMPERSONATION: f64 = 0.50;

/// Leetspeak typosquat shape.
pub const W_TYPOSQUAT: f64 = 0.40;

/// Special-character ratio tiers.
pub const W_SPECIAL_RATIO_HIGH: f64 = 0.30; // > 0.35
pub const W_SPECIAL_RATIO_MED: f64 = 0.15; // > 0.20

/// Subdomain tiers.
pub const W_SUBDOMAINS_MANY: f64 = 0.30; // > 3
pub const W_SUBDOMAINS_SOME: f64 = 0.15; // > 1

/// Explicit non-default port.
pub const W_NON_DEFAULT_PORT: f64 = 0.25;

/// Suspicious TLD suffix.
pub const W_SUSPICIOUS_TLD: f64 = 0.50;

/// Structural noise signals.
pub const W_MANY_DOTS: f64 = 0.20; // > 5
pub const W_MANY_HYPHENS: f64 = 0.20; // > 4
pub const W_ABNORMAL_DIVERSITY: f64 = 0.15; // > 0.85 or < 0.30
pub const W_HIGH_DIGIT_RATIO: f64 = 0.15; // > 0.35
pub const W_LONG_QUERY: f64 = 0.20; // > 50 chars

// ============================================================================
// RULE CUTOFFS
// ============================================================================

pub const LENGTH_VERY_LONG: usize = 150;
pub const LENGTH_LONG: usize = 80;
pub const LENGTH_SHORT: usize = 15;
pub const KEYWORDS_MANY: usize = 2;
pub const SPECIAL_RATIO_HIGH: f64 = 0.35;
pub const SPECIAL_RATIO_MED: f64 = 0.20;
pub const SUBDOMAINS_MANY: usize = 3;
pub const SUBDOMAINS_SOME: usize = 1;
pub const DOTS_MAX: usize = 5;
pub const HYPHENS_MAX: usize = 4;
pub const DIVERSITY_HIGH: f64 = 0.85;
pub const DIVERSITY_LOW: f64 = 0.30;
pub const DIGIT_RATIO_MAX: f64 = 0.35;
pub const QUERY_LENGTH_MAX: usize = 50;

/// Fallback reason when nothing triggers.
pub const NO_TRIGGER_REASON: &str = "No suspicious patterns detected";
