//! Real-World Weight Comparisons
//!
//! Maps an estimated total lens weight to a descriptive everyday-object
//! label so the number means something to a consumer ("roughly one AA
//! battery" instead of "24.4 g").
//!
//! The table is a fixed ascending list of half-open buckets: a weight
//! belongs to the first bucket whose upper bound it is strictly below, so
//! exactly 5.0 g lands in the coin bucket, not the paper one. Weights of
//! 40 g and above have no defined comparison and the lookup returns `None`;
//! callers are expected to omit the comparison line rather than extrapolate.

/// Half-open weight buckets: (exclusive upper bound in grams, label).
/// Rows must stay in ascending order.
const COMPARISONS: [(f64, &str); 8] = [
    (5.0, "about the weight of a sheet of A4 paper"),
    (10.0, "similar to a small coin"),
    (15.0, "like a USB flash drive"),
    (20.0, "comparable to a pack of chewing gum"),
    (25.0, "roughly one AA battery"),
    (30.0, "similar to a golf ball"),
    (35.0, "like a large egg"),
    (40.0, "close to a lemon"),
];

/// Look up the everyday-object comparison for a total pair weight.
///
/// Returns `None` for weights of 40 g and above - the table deliberately
/// stops there instead of inventing comparisons for implausibly heavy
/// estimates.
///
/// ```rust
/// use lens_core::comparisons::comparison_for_weight;
///
/// assert_eq!(comparison_for_weight(24.4), Some("roughly one AA battery"));
/// assert_eq!(comparison_for_weight(40.0), None);
/// ```
pub fn comparison_for_weight(total_weight_g: f64) -> Option<&'static str> {
    COMPARISONS
        .iter()
        .find(|(upper_g, _)| total_weight_g < *upper_g)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bucket() {
        assert_eq!(comparison_for_weight(2.0), Some("about the weight of a sheet of A4 paper"));
        assert_eq!(comparison_for_weight(7.5), Some("similar to a small coin"));
        assert_eq!(comparison_for_weight(12.0), Some("like a USB flash drive"));
        assert_eq!(comparison_for_weight(17.5), Some("comparable to a pack of chewing gum"));
        assert_eq!(comparison_for_weight(24.4), Some("roughly one AA battery"));
        assert_eq!(comparison_for_weight(27.0), Some("similar to a golf ball"));
        assert_eq!(comparison_for_weight(32.0), Some("like a large egg"));
        assert_eq!(comparison_for_weight(39.99), Some("close to a lemon"));
    }

    #[test]
    fn test_boundaries_are_half_open() {
        // An exact boundary weight belongs to the upper bucket
        assert_eq!(comparison_for_weight(5.0), Some("similar to a small coin"));
        assert_eq!(comparison_for_weight(35.0), Some("close to a lemon"));
    }

    #[test]
    fn test_heavy_weights_uncategorized() {
        assert_eq!(comparison_for_weight(40.0), None);
        assert_eq!(comparison_for_weight(120.0), None);
    }

    #[test]
    fn test_table_ascending() {
        for pair in COMPARISONS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
