//! Model Module
//!
//! Pretrained weight-table handling: loading the trainer's JSON export and
//! turning it into a secondary risk score for blending. No training happens
//! here; weights are consumed as-is.
//!
//! ## Structure
//! - `weights`: file schema, `ModelWeights` (Absent | Loaded), startup load
//! - `blend`: trigger table and model-score computation

pub mod blend;
pub mod weights;

pub use blend::{model_score, TOP_FEATURE_LIMIT};
pub use weights::{load_or_absent, load_weights, ModelWeights, TrainedWeights, WeightsError};
