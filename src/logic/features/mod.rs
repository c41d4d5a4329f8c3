//! Feature Extraction Module
//!
//! Derives a fixed-shape feature vector from a URL string. Leaf module:
//! pure functions, no I/O, never fails.
//!
//! ## Structure
//! - `types`: [`UrlFeatures`] and the named feature layout
//! - `lists`: fixed keyword / shortener / TLD / brand tables
//! - `extract`: the extraction function itself

pub mod extract;
pub mod lists;
pub mod types;

pub use extract::extract_url_features;
pub use types::{UrlFeatures, FEATURE_LAYOUT};
