//! Threat Intel Module
//!
//! External blocklist lookup behind the [`ThreatIntel`] trait. The only part
//! of an assessment that touches the network; timeouts and failures degrade
//! to an `unavailable` check, never to an error for the caller.

pub mod client;
pub mod types;

pub use client::{SafeBrowsingClient, ThreatIntel, DEFAULT_THREAT_TYPE};
pub use types::{IntelError, IntelOutcome, IntelVerdict};
