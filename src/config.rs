//! Configuration module

use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Google Safe Browsing API key; absent means lookups report unavailable
    pub safe_browsing_api_key: Option<String>,

    /// Path to the trained weight table; absence is a valid state
    pub model_weights_path: String,

    /// Upper bound for one threat-intel lookup
    pub intel_timeout: Duration,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            safe_browsing_api_key: env::var("SAFE_BROWSING_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),

            model_weights_path: env::var("MODEL_WEIGHTS_PATH")
                .unwrap_or_else(|_| "models/trained_model.json".to_string()),

            intel_timeout: Duration::from_millis(
                env::var("INTEL_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
            ),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
