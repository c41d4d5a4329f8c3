//! QR Shield - URL Trust Analysis Service
//!
//! Classifies scanned QR payloads into safe / suspicious / malicious by
//! fusing three independent signals: a rule-based risk scorer (optionally
//! blended with a pretrained weight table), a UPI payment-URI validator, and
//! an external Safe Browsing lookup.
//!
//! # Architecture
//!
//! ```text
//! raw text ──► Content Classifier ──► { UPI Validator }
//!                                     { Feature Extractor ──► Risk Scorer }
//!                                              │
//!                    Threat Intel ─────────────┤
//!                                              ▼
//!                                       Verdict Fusion ──► RiskAssessment
//! ```

mod config;
mod error;
mod handlers;
mod logic;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::intel::{SafeBrowsingClient, ThreatIntel};
use logic::model::{self, ModelWeights};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qr_shield=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("QR Shield starting...");

    // Load the weight table once; absence is a valid state.
    let weights = model::load_or_absent(Path::new(&config.model_weights_path));

    let intel = SafeBrowsingClient::new(
        config.safe_browsing_api_key.clone(),
        config.intel_timeout,
    );
    if !intel.is_configured() {
        tracing::warn!("Safe Browsing key not set; threat intel checks will report unavailable");
    }

    let state = AppState {
        weights: Arc::new(weights),
        intel: Arc::new(intel),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

/// Shared application state. Read-only after startup; requests run in
/// parallel with no cross-request mutation.
#[derive(Clone)]
pub struct AppState {
    pub weights: Arc<ModelWeights>,
    pub intel: Arc<dyn ThreatIntel>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/v1/scan", post(handlers::scan::scan))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
