//! Diagnostic feature vector produced by one extraction

use serde::{Deserialize, Serialize};

/// Feature names, in the fixed output order of [`FeatureVector::to_array`].
pub const FEATURE_NAMES: [&str; 4] = ["asymmetry_level", "color_count", "dot_flag", "compactness"];

/// The fixed-order diagnostic feature record for one (image, mask) pair.
///
/// Produced once per extraction and immutable afterwards; the downstream
/// batch collator consumes it keyed by an external image identifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Shape asymmetry level: 1 (symmetric) to 3 (asymmetric)
    pub asymmetry_level: u8,
    /// Number of distinct clinically relevant colors present: 0 to 6
    pub color_count: u8,
    /// 1 if dot/globule structures were confirmed, 0 otherwise
    pub dot_flag: u8,
    /// Border irregularity: perimeter^2 / (4*pi*area), 1.0 for a circle
    pub compactness: f64,
}

impl FeatureVector {
    /// Scalars in the fixed order matching [`FEATURE_NAMES`].
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.asymmetry_level as f64,
            self.color_count as f64,
            self.dot_flag as f64,
            self.compactness,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order_matches_names() {
        let fv = FeatureVector {
            asymmetry_level: 3,
            color_count: 2,
            dot_flag: 1,
            compactness: 1.25,
        };
        assert_eq!(fv.to_array(), [3.0, 2.0, 1.0, 1.25]);
        assert_eq!(FEATURE_NAMES.len(), fv.to_array().len());
        assert_eq!(FEATURE_NAMES[0], "asymmetry_level");
        assert_eq!(FEATURE_NAMES[3], "compactness");
    }

    #[test]
    fn test_feature_vector_is_serde() {
        fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
        assert_serde::<FeatureVector>();
    }
}
