//! # Lens Edge Thickness & Weight Estimation
//!
//! Estimates the edge thickness and pair weight of eyeglass lenses from a
//! prescription (refractive index, sphere/cylinder power) and frame geometry
//! (lens width, bridge width, pupillary distance).
//!
//! ## Assumptions
//!
//! - Simplified lensmaker relation for the base curve: r = (n - 1) / D × 1000 mm
//! - Worst-case convention: sphere and cylinder signs are discarded before
//!   summing, so the estimate reflects the thickest-edge meridian
//! - Fixed 1 mm minimum center/edge margin and an empirical 0.15 mm-per-mm
//!   decentration coefficient
//! - Each lens is modeled as a cylinder of the lens width for the weight
//!   estimate, with an average material density of 1.30 g/cm³
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use lens_core::calculations::thickness::{estimate, EstimateOutcome, ThicknessInput};
//!
//! let input = ThicknessInput {
//!     refractive_index: 1.50,
//!     sphere_power: 500.0, // raw units, auto-normalized to 5.00 D
//!     cylinder_power: 0.0,
//!     lens_width_mm: 50.0,
//!     bridge_width_mm: 22.0,
//!     pupillary_distance_mm: 64.0,
//! };
//!
//! match estimate(&input).unwrap() {
//!     EstimateOutcome::Estimate(result) => {
//!         println!("Edge thickness: {:.2} mm", result.edge_thickness_mm);
//!         println!("Pair weight: {:.2} g", result.total_weight_g);
//!     }
//!     EstimateOutcome::NoComputation => println!("No calculation performed"),
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::comparisons::comparison_for_weight;
use crate::errors::{LensError, LensResult};
use crate::units::{CubicCentimeters, CubicMillimeters, Diopters, Grams, Millimeters};

/// Sphere powers with magnitude above this are assumed to be scaled ×100
pub const SPHERE_SCALE_THRESHOLD_D: f64 = 20.0;

/// Cylinder powers with magnitude above this are assumed to be scaled ×100
pub const CYLINDER_SCALE_THRESHOLD_D: f64 = 8.0;

/// Divisor applied to powers detected as scaled input
pub const RAW_SCALE_DIVISOR: f64 = 100.0;

/// Assumed minimum center/edge safety margin (mm)
pub const MIN_EDGE_MARGIN_MM: f64 = 1.0;

/// Empirical decentration-to-thickness coefficient (mm of edge per mm of offset)
pub const DECENTRATION_FACTOR: f64 = 0.15;

/// Average lens material density used for the weight estimate (g/cm³)
pub const LENS_DENSITY_G_PER_CM3: f64 = 1.30;

/// Input parameters for a lens thickness estimate.
///
/// Powers may be entered in plain diopters or in the ×100 convention some
/// sources use (e.g. 500 for a 5.00 D sphere); `estimate` detects and
/// normalizes both. All lengths are millimeters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "refractive_index": 1.5,
///   "sphere_power": 500.0,
///   "cylinder_power": 0.0,
///   "lens_width_mm": 50.0,
///   "bridge_width_mm": 22.0,
///   "pupillary_distance_mm": 64.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThicknessInput {
    /// Refractive index of the lens material (1.50 to 2.00)
    pub refractive_index: f64,

    /// Sphere power, signed, raw user units (-2000 to 2000)
    pub sphere_power: f64,

    /// Cylinder power, signed, raw user units (-800 to 800)
    pub cylinder_power: f64,

    /// Horizontal lens width in mm (10 to 100)
    pub lens_width_mm: f64,

    /// Frame bridge width in mm (10 to 30)
    pub bridge_width_mm: f64,

    /// Pupillary distance, sum of both eyes, in mm (40 to 80)
    pub pupillary_distance_mm: f64,
}

impl ThicknessInput {
    /// Validate input parameters against their declared ranges.
    pub fn validate(&self) -> LensResult<()> {
        if !(1.50..=2.00).contains(&self.refractive_index) {
            return Err(LensError::invalid_input(
                "refractive_index",
                self.refractive_index.to_string(),
                "Refractive index must be 1.50-2.00",
            ));
        }
        if !(-2000.0..=2000.0).contains(&self.sphere_power) {
            return Err(LensError::invalid_input(
                "sphere_power",
                self.sphere_power.to_string(),
                "Sphere power must be -2000 to 2000",
            ));
        }
        if !(-800.0..=800.0).contains(&self.cylinder_power) {
            return Err(LensError::invalid_input(
                "cylinder_power",
                self.cylinder_power.to_string(),
                "Cylinder power must be -800 to 800",
            ));
        }
        if !(10.0..=100.0).contains(&self.lens_width_mm) {
            return Err(LensError::invalid_input(
                "lens_width_mm",
                self.lens_width_mm.to_string(),
                "Lens width must be 10-100 mm",
            ));
        }
        if !(10.0..=30.0).contains(&self.bridge_width_mm) {
            return Err(LensError::invalid_input(
                "bridge_width_mm",
                self.bridge_width_mm.to_string(),
                "Bridge width must be 10-30 mm",
            ));
        }
        if !(40.0..=80.0).contains(&self.pupillary_distance_mm) {
            return Err(LensError::invalid_input(
                "pupillary_distance_mm",
                self.pupillary_distance_mm.to_string(),
                "Pupillary distance must be 40-80 mm",
            ));
        }
        Ok(())
    }

    /// Half the lens width - the radius used for sagitta and volume
    pub fn half_width_mm(&self) -> f64 {
        self.lens_width_mm / 2.0
    }

    /// Total frame width: lens width plus bridge width
    pub fn frame_width_mm(&self) -> f64 {
        self.lens_width_mm + self.bridge_width_mm
    }

    /// Decentration: offset of the optical center from the frame center.
    ///
    /// Negative when the pupillary distance exceeds the frame width.
    pub fn decentration_mm(&self) -> f64 {
        (self.frame_width_mm() - self.pupillary_distance_mm) / 2.0
    }

    /// Combined optical power after normalizing both components.
    ///
    /// Always non-negative; zero means a plano lens (no estimate possible).
    pub fn combined_power(&self) -> Diopters {
        normalize_power(self.sphere_power, SPHERE_SCALE_THRESHOLD_D)
            + normalize_power(self.cylinder_power, CYLINDER_SCALE_THRESHOLD_D)
    }
}

/// Normalize a user-entered power to diopters.
///
/// Two conventions coexist in the wild: plain diopters (e.g. 5.0) and a
/// ×100 scaled form (e.g. 500). The rule is magnitude-based: a value whose
/// absolute value exceeds `threshold_d` is taken as scaled and divided by
/// 100, otherwise it is used as-is. Normalization is idempotent for values
/// at or below the threshold.
///
/// The sign is discarded deliberately: the estimate follows the worst-case
/// (thickest-edge) convention, so only power magnitude matters downstream.
pub fn normalize_power(raw: f64, threshold_d: f64) -> Diopters {
    let magnitude = raw.abs();
    if magnitude > threshold_d {
        Diopters(magnitude / RAW_SCALE_DIVISOR)
    } else {
        Diopters(magnitude)
    }
}

/// Base curve radius from the simplified lensmaker relation: r = (n - 1) / D, in mm.
pub fn base_radius(refractive_index: f64, power: Diopters) -> Millimeters {
    Millimeters((refractive_index - 1.0) / power.0 * 1000.0)
}

/// Sagittal depth of the base curve across the lens half-width.
///
/// The radicand is clamped at zero: when the half-width exceeds the base
/// radius (near-flat or extreme-power geometry) the depth degenerates to
/// the full radius instead of producing a NaN.
pub fn sagittal_depth(base_radius: Millimeters, half_width: Millimeters) -> Millimeters {
    let radicand = (base_radius.0.powi(2) - half_width.0.powi(2)).max(0.0);
    Millimeters(base_radius.0 - radicand.sqrt())
}

/// Outcome of a thickness estimate.
///
/// `NoComputation` is informational, not an error: a plano lens (combined
/// power zero) has no meaningful thickness or weight to estimate, and the
/// caller should show a neutral notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EstimateOutcome {
    /// A computed thickness/weight estimate
    Estimate(ThicknessResult),
    /// Sphere and cylinder powers both normalize to zero
    NoComputation,
}

/// Results of a lens thickness estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "edge_thickness_mm": 4.78,
///   "total_weight_g": 24.38,
///   "comparison": "roughly one AA battery"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThicknessResult {
    /// Estimated edge thickness in mm (maximum-meridian reference).
    ///
    /// Not clamped: a large negative decentration can drive this below
    /// zero, and the value is propagated as-is for the caller to display.
    pub edge_thickness_mm: f64,

    /// Estimated total weight of the pair in grams
    pub total_weight_g: f64,

    /// Everyday-object comparison; absent for weights of 40 g and above
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
}

/// Estimate edge thickness and pair weight for a lens prescription.
///
/// Validates the input ranges first, so unchecked callers get a structured
/// `InvalidInput` error instead of a nonsense estimate. For in-range inputs
/// this is a pure, deterministic function that cannot fail: the only
/// non-numeric outcome is `NoComputation` for a plano prescription.
pub fn estimate(input: &ThicknessInput) -> LensResult<EstimateOutcome> {
    input.validate()?;

    let power = input.combined_power();
    if power.0 == 0.0 {
        return Ok(EstimateOutcome::NoComputation);
    }

    let radius = base_radius(input.refractive_index, power);
    let sagitta = sagittal_depth(radius, Millimeters(input.half_width_mm()));

    let edge_thickness_mm = sagitta.0 + MIN_EDGE_MARGIN_MM + DECENTRATION_FACTOR * input.decentration_mm();

    // Per-lens volume as a cylinder of the lens radius and edge thickness
    let volume = CubicMillimeters(std::f64::consts::PI * input.half_width_mm().powi(2) * edge_thickness_mm);
    let volume_cm3: CubicCentimeters = volume.into();
    let per_lens_weight = Grams(volume_cm3.0 * LENS_DENSITY_G_PER_CM3);
    let total_weight = per_lens_weight * 2.0;

    Ok(EstimateOutcome::Estimate(ThicknessResult {
        edge_thickness_mm,
        total_weight_g: total_weight.0,
        comparison: comparison_for_weight(total_weight.0).map(str::to_string),
    }))
}
