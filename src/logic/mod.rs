//! Logic Module - Assessment Engines
//!
//! Everything with decision logic lives here; transport and configuration
//! stay outside.
//!
//! ## Structure
//! - `content/` - content-type classification (upi | url | text)
//! - `features/` - URL feature extraction
//! - `scorer/` - rule-based risk scoring with optional model blend
//! - `model/` - pretrained weight table
//! - `upi/` - payment-URI validation
//! - `intel/` - external threat-intel lookup
//! - `verdict/` - verdict fusion
//! - `pipeline` - end-to-end orchestration

// Some exported helpers are module surface, not yet called everywhere
#![allow(dead_code)]

pub mod content;
pub mod features;
pub mod intel;
pub mod model;
pub mod pipeline;
pub mod scorer;
pub mod upi;
pub mod verdict;
