//! Dot/globule detection
//!
//! Two explicit stages so the boundary between them stays testable:
//! [`mark_candidates`] finds plausible globule-like blobs with classic
//! contour heuristics and paints a filled green marker over each, then
//! [`confirm_circles`] re-detects only those markers by color with a
//! circle transform, acting as a confirmatory circular fit. Both stages
//! take their thresholds from [`crate::thresholds`].

mod confirm;
mod hough;
mod mark;

pub use confirm::confirm_circles;
pub use hough::{hough_circles, DetectedCircle, HoughParams};
pub use mark::mark_candidates;

use dermafeat_core::{Algorithm, BgrImage, Error, Mask, Result};

use crate::thresholds::{MIN_CIRCULARITY, MIN_REGION_AREA};

/// Parameters for the dot/globule detector
#[derive(Debug, Clone)]
pub struct DotDetectParams {
    /// Minimum enclosed area for a candidate blob
    pub min_candidate_area: f64,
    /// Minimum circularity for a candidate blob
    pub min_circularity: f64,
    /// Circle-confirmation transform parameters
    pub hough: HoughParams,
}

impl Default for DotDetectParams {
    fn default() -> Self {
        Self {
            min_candidate_area: MIN_REGION_AREA,
            min_circularity: MIN_CIRCULARITY,
            hough: HoughParams::default(),
        }
    }
}

/// Dot/globule detector
#[derive(Debug, Clone, Default)]
pub struct DotDetect;

impl Algorithm for DotDetect {
    type Input = (BgrImage, Mask);
    type Output = u8;
    type Params = DotDetectParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "DotDetect"
    }

    fn description(&self) -> &'static str {
        "Presence of circular high-contrast dot/globule structures"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let annotated = mark::mark_candidates_with(
            &input.0,
            &input.1,
            params.min_candidate_area,
            params.min_circularity,
        )?;
        Ok(u8::from(confirm::confirm_circles_with(&annotated, &params.hough)?))
    }
}

/// Detect dots/globules: 1 if at least one marked candidate is confirmed
/// as a circle, 0 otherwise.
pub fn detect_dots(image: &BgrImage, mask: &Mask) -> Result<u8> {
    let annotated = mark_candidates(image, mask)?;
    Ok(u8::from(confirm_circles(&annotated)?))
}
