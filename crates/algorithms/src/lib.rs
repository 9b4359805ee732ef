//! # DermaFeat Algorithms
//!
//! Lesion image analysis algorithms for DermaFeat.
//!
//! ## Analyzer modules
//!
//! - **symmetry**: bilateral/diagonal shape asymmetry scoring
//! - **color**: HSV color-band region counting inside the lesion
//! - **dots**: dot/globule detection (candidate marking + circle confirmation)
//! - **compactness**: perimeter²/area border irregularity
//! - **features**: fixed-order aggregation into a [`FeatureVector`]
//!
//! ## Supporting modules
//!
//! - **morphology**: binary erosion/dilation/opening
//! - **contour**: connected components and boundary tracing
//! - **filter**: CLAHE, median blur, adaptive and Otsu thresholding
//! - **geometry**: mask centroid, border cells, symmetry frame
//! - **thresholds**: every tunable policy constant in one place
//!
//! [`FeatureVector`]: dermafeat_core::FeatureVector

pub mod color;
pub mod compactness;
pub mod contour;
pub mod dots;
pub mod features;
pub mod filter;
pub mod geometry;
pub mod morphology;
pub mod symmetry;
pub mod thresholds;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::color::{count_colors, ColorCount, ColorCountParams};
    pub use crate::compactness::{compactness, Compactness, CompactnessParams};
    pub use crate::contour::{find_contours, BoundingBox, Contour};
    pub use crate::dots::{detect_dots, DotDetect, DotDetectParams};
    pub use crate::features::{extract_features, FeatureExtractor, FeatureExtractorParams};
    pub use crate::morphology::StructuringElement;
    pub use crate::symmetry::{asymmetry_score, AsymmetryLevel, Symmetry, SymmetryParams};
    pub use dermafeat_core::prelude::*;
}
