//! Risk Scorer Module
//!
//! Consumes a [`UrlFeatures`] vector, applies the weighted rule table, and
//! optionally blends the pretrained model score.
//!
//! ## Structure
//! - `types`: [`Severity`], [`RiskReport`]
//! - `rules`: weights and cutoffs (constants only)
//! - `engine`: scoring logic
//!
//! [`UrlFeatures`]: crate::logic::features::UrlFeatures

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::score_url;
pub use rules::{CONFIDENCE_MARGIN, HIGH_THRESHOLD, SUSPICIOUS_THRESHOLD};
pub use types::{RiskReport, Severity};
