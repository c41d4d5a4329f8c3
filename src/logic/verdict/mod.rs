//! Verdict Module
//!
//! Final verdict fusion. This is where the content classifier, the risk
//! scorer, the UPI validator, and the external threat-intel result meet.
//!
//! ## Structure
//! - `types`: [`Verdict`], [`Checks`], [`RiskAssessment`]
//! - `fusion`: precedence rules per branch

pub mod fusion;
pub mod types;

pub use fusion::{fuse_text, fuse_upi, fuse_url, HTTP_INSECURE_REASON, TEXT_REASON};
pub use types::{Analysis, CheckState, Checks, RiskAssessment, Verdict};
