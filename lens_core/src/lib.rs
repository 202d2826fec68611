//! # lens_core - Lens Thickness Estimation Engine
//!
//! `lens_core` is the computational heart of Lenscalc, estimating eyeglass
//! lens edge thickness and pair weight from a prescription and frame
//! geometry. All inputs and outputs are JSON-serializable, making it easy
//! to drive from a UI, an API, or an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use lens_core::calculations::thickness::{estimate, EstimateOutcome, ThicknessInput};
//!
//! let input = ThicknessInput {
//!     refractive_index: 1.50,
//!     sphere_power: 500.0,
//!     cylinder_power: 0.0,
//!     lens_width_mm: 50.0,
//!     bridge_width_mm: 22.0,
//!     pupillary_distance_mm: 64.0,
//! };
//!
//! if let EstimateOutcome::Estimate(result) = estimate(&input).unwrap() {
//!     println!("{:.2} mm edge, {:.2} g pair", result.edge_thickness_mm, result.total_weight_g);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The thickness/weight estimation pipeline
//! - [`comparisons`] - Real-world weight comparison lookup
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod comparisons;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::thickness::{estimate, EstimateOutcome, ThicknessInput, ThicknessResult};
pub use errors::{LensError, LensResult};
