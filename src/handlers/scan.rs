//! Scan handler
//!
//! The single classification endpoint: takes a scanned payload, returns the
//! fused trust assessment.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::logic::pipeline;
use crate::logic::verdict::RiskAssessment;
use crate::{AppError, AppResult, AppState};

/// Request body. The field is named `url` for historical reasons but accepts
/// any scanned text.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    #[serde(default)]
    pub url: String,
}

/// Classify one payload into safe / suspicious / malicious.
pub async fn scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> AppResult<Json<RiskAssessment>> {
    let payload = req.url.trim();
    if payload.is_empty() {
        return Err(AppError::ValidationError(
            "Missing or empty \"url\" field".to_string(),
        ));
    }

    let assessment = pipeline::assess(
        payload,
        &state.weights,
        state.intel.as_ref(),
        state.config.intel_timeout,
    )
    .await;

    tracing::debug!(
        status = %assessment.status,
        content_type = assessment.content_type.as_str(),
        confidence = assessment.confidence,
        "payload assessed"
    );

    Ok(Json(assessment))
}
