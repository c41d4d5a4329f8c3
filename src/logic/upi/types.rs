//! UPI Validation Types
//!
//! Data structures only - validation logic lives in `validator`.

use serde::{Deserialize, Serialize};

/// Result of validating one payment URI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiValidation {
    /// True only when every check passed
    pub valid: bool,
    /// One entry per failed check, in check order
    pub errors: Vec<String>,
    /// `pa` - virtual payment address
    pub vpa: Option<String>,
    /// `pn` - payee display name
    pub payee_name: Option<String>,
    /// `am` - amount
    pub amount: Option<String>,
    /// `tn` - transaction note
    pub note: Option<String>,
    /// `mc` - merchant category code
    pub merchant_code: Option<String>,
}

impl UpiValidation {
    /// First validation error, if any. Used as the fused verdict reason.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}
