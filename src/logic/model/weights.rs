//! Trained Weight Table
//!
//! Loads the feature-importance table exported by the offline training
//! pipeline. Loaded once at process start and never mutated. Absence is a
//! normal state: the scorer then runs in pure rule-based mode.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// SCHEMA
// ============================================================================

/// Versioned weight file written by the trainer:
/// `{model_type, feature_count, top_features: [[name, importance], ...]}`.
/// Extra trainer metadata (accuracy, auc, ...) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedWeights {
    pub model_type: String,
    pub feature_count: usize,
    pub top_features: Vec<(String, f64)>,
}

/// Tagged presence of the weight table. The scorer branches on this variant
/// explicitly instead of checking a nullable field.
#[derive(Debug, Clone)]
pub enum ModelWeights {
    /// No table available: pure rule-based scoring
    Absent,
    /// Table loaded at startup, immutable for the process lifetime
    Loaded(TrainedWeights),
}

impl ModelWeights {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ModelWeights::Loaded(_))
    }
}

// ============================================================================
// LOADING
// ============================================================================

#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("cannot read weight table: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed weight table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Strict load, for callers that want the error.
pub fn load_weights(path: &Path) -> Result<TrainedWeights, WeightsError> {
    let raw = std::fs::read_to_string(path)?;
    let weights: TrainedWeights = serde_json::from_str(&raw)?;
    Ok(weights)
}

/// Startup load: a missing or broken file logs a warning and degrades to
/// [`ModelWeights::Absent`]. Never a startup failure.
pub fn load_or_absent(path: &Path) -> ModelWeights {
    match load_weights(path) {
        Ok(weights) => {
            tracing::info!(
                model_type = %weights.model_type,
                features = weights.top_features.len(),
                "trained weight table loaded"
            );
            ModelWeights::Loaded(weights)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "no usable weight table, running rule-based only");
            ModelWeights::Absent
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
    fn test_parse_trainer_output() {
        let raw = r#"{
            "model_type": "RandomForest",
            "accuracy": 0.97,
            "auc": 0.99,
            "feature_count": 38,
            "top_features": [["url_length", 0.18], ["is_https", 0.12]]
        }"#;
        let weights: TrainedWeights = serde_json::from_str(raw).unwrap();
        assert_eq!(weights.model_type, "RandomForest");
        assert_eq!(weights.feature_count, 38);
        assert_eq!(weights.top_features[0].0, "url_length");
    }

    #[test]
    fn test_missing_file_is_absent() {
        let loaded = load_or_absent(Path::new("/nonexistent/trained_model.json"));
        assert!(!loaded.is_loaded());
    }
}
