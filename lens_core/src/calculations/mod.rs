//! # Lens Calculations
//!
//! This module contains the estimation calculations. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `estimate(input) -> Result<Outcome, LensError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`thickness`] - Lens edge thickness and pair weight estimation

pub mod thickness;

// Re-export commonly used types
pub use thickness::{estimate, EstimateOutcome, ThicknessInput, ThicknessResult};
