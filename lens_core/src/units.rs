//! # Unit Types
//!
//! Type-safe wrappers for optical and geometric units. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The estimator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units Used
//!
//! - Optical power: diopters (D, inverse meters)
//! - Length: millimeters (mm)
//! - Volume: cubic millimeters (mm³), cubic centimeters (cm³)
//! - Mass: grams (g)
//!
//! ## Example
//!
//! ```rust
//! use lens_core::units::{CubicCentimeters, CubicMillimeters};
//!
//! let volume = CubicMillimeters(9500.0);
//! let cm3: CubicCentimeters = volume.into();
//! assert_eq!(cm3.0, 9.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Optical power in diopters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diopters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Volume in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

/// Volume in cubic centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

/// Mass in grams
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grams(pub f64);

impl From<CubicMillimeters> for CubicCentimeters {
    fn from(mm3: CubicMillimeters) -> Self {
        CubicCentimeters(mm3.0 / 1000.0)
    }
}

impl From<CubicCentimeters> for CubicMillimeters {
    fn from(cm3: CubicCentimeters) -> Self {
        CubicMillimeters(cm3.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Diopters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(CubicCentimeters);
impl_arithmetic!(Grams);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm3_to_cm3() {
        let mm3 = CubicMillimeters(9381.4);
        let cm3: CubicCentimeters = mm3.into();
        assert!((cm3.0 - 9.3814).abs() < 1e-9);
    }

    #[test]
    fn test_cm3_to_mm3() {
        let cm3 = CubicCentimeters(1.3);
        let mm3: CubicMillimeters = cm3.into();
        assert!((mm3.0 - 1300.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(100.0);
        let b = Millimeters(25.0);
        assert_eq!((a + b).0, 125.0);
        assert_eq!((a - b).0, 75.0);
        assert_eq!((a * 2.0).0, 200.0);
        assert_eq!((a / 2.0).0, 50.0);
    }

    #[test]
    fn test_serialization() {
        let power = Diopters(5.25);
        let json = serde_json::to_string(&power).unwrap();
        assert_eq!(json, "5.25");

        let roundtrip: Diopters = serde_json::from_str(&json).unwrap();
        assert_eq!(power, roundtrip);
    }
}
