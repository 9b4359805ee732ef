//! Feature aggregation
//!
//! Runs the four analyzers in a fixed order and assembles the feature
//! vector. Dots only run when at least two colors are present; a lesion
//! flat in color has no globule pattern worth confirming, and the
//! short-circuit keeps the most expensive analyzer off the common path.

use dermafeat_core::{Algorithm, BgrImage, Error, FeatureVector, Mask, Result};
use tracing::debug;

use crate::color::{ColorCount, ColorCountParams};
use crate::compactness::{Compactness, CompactnessParams};
use crate::dots::{DotDetect, DotDetectParams};
use crate::symmetry::{Symmetry, SymmetryParams};

/// Parameters for the full extraction pipeline, one block per analyzer
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractorParams {
    pub symmetry: SymmetryParams,
    pub color: ColorCountParams,
    pub dots: DotDetectParams,
    pub compactness: CompactnessParams,
}

/// The full lesion feature extraction pipeline
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor;

impl Algorithm for FeatureExtractor {
    type Input = (BgrImage, Mask);
    type Output = FeatureVector;
    type Params = FeatureExtractorParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "FeatureExtractor"
    }

    fn description(&self) -> &'static str {
        "Asymmetry, color count, dot flag and compactness of one lesion"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (image, mask) = input;

        let asymmetry = Symmetry
            .execute(mask.clone(), params.symmetry)
            .map_err(|e| e.in_analyzer("symmetry"))?;
        let color_count = ColorCount
            .execute((image.clone(), mask.clone()), params.color)
            .map_err(|e| e.in_analyzer("color"))?;
        // Dots are only worth confirming on a lesion with color structure
        let dot_flag = if color_count >= 2 {
            DotDetect
                .execute((image, mask.clone()), params.dots)
                .map_err(|e| e.in_analyzer("dots"))?
        } else {
            0
        };
        let compactness = Compactness
            .execute(mask, params.compactness)
            .map_err(|e| e.in_analyzer("compactness"))?;

        let features = FeatureVector {
            asymmetry_level: asymmetry.level(),
            color_count,
            dot_flag,
            compactness,
        };
        debug!(?features, "lesion features extracted");
        Ok(features)
    }
}

/// Extract the `[asymmetry_level, color_count, dot_flag, compactness]`
/// feature vector for one (image, mask) pair with default parameters.
pub fn extract_features(image: &BgrImage, mask: &Mask) -> Result<FeatureVector> {
    FeatureExtractor.execute_default((image.clone(), mask.clone()))
}
