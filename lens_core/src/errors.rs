//! # Error Types
//!
//! Structured error types for lens_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use lens_core::errors::{LensError, LensResult};
//!
//! fn validate_index(refractive_index: f64) -> LensResult<()> {
//!     if refractive_index <= 1.0 {
//!         return Err(LensError::InvalidInput {
//!             field: "refractive_index".to_string(),
//!             value: refractive_index.to_string(),
//!             reason: "Refractive index must exceed 1.0".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for lens_core operations
pub type LensResult<T> = Result<T, LensError>;

/// Structured error type for estimation operations.
///
/// The estimator itself never fails on in-range inputs (the sqrt domain is
/// clamped), so the only error surface is a caller contract violation:
/// an input outside its declared range.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum LensError {
    /// An input value is outside its declared range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl LensError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        LensError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LensError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = LensError::invalid_input("lens_width_mm", "5.0", "Lens width must be 10-100 mm");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: LensError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_display() {
        let error = LensError::invalid_input("bridge_width_mm", "5.0", "Bridge width must be 10-30 mm");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'bridge_width_mm': 5.0 - Bridge width must be 10-30 mm"
        );
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }
}
