//! Grayscale filtering and thresholding
//!
//! The preprocessing chain for candidate marking (local contrast
//! equalization, median smoothing, locally adaptive binarization) plus the
//! global Otsu threshold used by the compactness analyzer.

mod clahe;
mod median;
mod threshold;

pub use clahe::{clahe, ClaheParams};
pub use median::median_blur;
pub use threshold::{adaptive_threshold, otsu_level, threshold_binary};
