//! UPI Module
//!
//! Payment-URI parameter validation. Leaf module, independent of the URL
//! feature pipeline.

pub mod types;
pub mod validator;

pub use types::UpiValidation;
pub use validator::validate_upi;
