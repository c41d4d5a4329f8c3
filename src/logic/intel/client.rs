//! Safe Browsing Client
//!
//! Production [`ThreatIntel`] implementation backed by the Google Safe
//! Browsing v4 `threatMatches:find` endpoint. The client fails closed: any
//! error surfaces as [`IntelError`] and is recorded as unavailable upstream,
//! never as "unsafe".

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::{IntelError, IntelVerdict};

// ============================================================================
// TRAIT
// ============================================================================

/// Collaborator seam for the external lookup. Tests inject mocks here.
#[async_trait]
pub trait ThreatIntel: Send + Sync {
    async fn check(&self, url: &str) -> Result<IntelVerdict, IntelError>;
}

// ============================================================================
// CONSTANTS
// ============================================================================

const API_BASE: &str = "https://safebrowsing.googleapis.com/v4/threatMatches:find";
const CLIENT_ID: &str = "qr-shield";

/// Fallback threat label when the service flags a URL without a match type.
pub const DEFAULT_THREAT_TYPE: &str = "MALICIOUS_URL";

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    client: ClientInfo<'a>,
    threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo<'a> {
    client_id: &'a str,
    client_version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInfo<'a> {
    threat_types: &'a [&'a str],
    platform_types: &'a [&'a str],
    threat_entry_types: &'a [&'a str],
    threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ThreatEntry<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    matches: Vec<ThreatMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreatMatch {
    threat_type: Option<String>,
}

// ============================================================================
// CLIENT
// ============================================================================

pub struct SafeBrowsingClient {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl SafeBrowsingClient {
    /// Build a client with a bounded request timeout. An empty key leaves the
    /// client unconfigured; every lookup then reports `NotConfigured`.
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl ThreatIntel for SafeBrowsingClient {
    async fn check(&self, url: &str) -> Result<IntelVerdict, IntelError> {
        let api_key = self.api_key.as_deref().ok_or(IntelError::NotConfigured)?;

        let body = LookupRequest {
            client: ClientInfo {
                client_id: CLIENT_ID,
                client_version: env!("CARGO_PKG_VERSION"),
            },
            threat_info: ThreatInfo {
                threat_types: &["MALWARE", "SOCIAL_ENGINEERING", "POTENTIALLY_HARMFUL_APPLICATION"],
                platform_types: &["ANY_PLATFORM"],
                threat_entry_types: &["URL"],
                threat_entries: vec![ThreatEntry { url }],
            },
        };

        let response = self
            .http
            .post(format!("{API_BASE}?key={api_key}"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IntelError::BadStatus(response.status().as_u16()));
        }

        let lookup: LookupResponse = response.json().await?;

        match lookup.matches.first() {
            Some(m) => Ok(IntelVerdict::unsafe_with(
                m.threat_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_THREAT_TYPE.to_string()),
            )),
            None => Ok(IntelVerdict::safe()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_client() {
        let client = SafeBrowsingClient::new(None, Duration::from_secs(5));
        assert!(!client.is_configured());
        let empty = SafeBrowsingClient::new(Some(String::new()), Duration::from_secs(5));
        assert!(!empty.is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_check_fails_closed() {
        let client = SafeBrowsingClient::new(None, Duration::from_secs(5));
        let err = client.check("https://example.com").await.unwrap_err();
        assert!(matches!(err, IntelError::NotConfigured));
    }

    #[test]
    fn test_response_decoding() {
        let raw = r#"{"matches":[{"threatType":"SOCIAL_ENGINEERING","platformType":"ANY_PLATFORM"}]}"#;
        let decoded: LookupResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            decoded.matches[0].threat_type.as_deref(),
            Some("SOCIAL_ENGINEERING")
        );

        // No matches at all is the "safe" shape.
        let empty: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.matches.is_empty());
    }
}
