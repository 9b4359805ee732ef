//! Border compactness
//!
//! Isoperimetric quotient of the largest lesion contour. A circle scores
//! 1.0; the more the border wiggles, the higher the score.

use dermafeat_core::{Algorithm, Error, Mask, Result};
use tracing::debug;

use crate::contour::{find_contours, Contour};
use crate::filter::{otsu_level, threshold_binary};

/// Parameters for the compactness analyzer (none yet; the struct keeps
/// the call shape uniform with the other analyzers)
#[derive(Debug, Clone, Default)]
pub struct CompactnessParams;

/// Border compactness analyzer
#[derive(Debug, Clone, Default)]
pub struct Compactness;

impl Algorithm for Compactness {
    type Input = Mask;
    type Output = f64;
    type Params = CompactnessParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Compactness"
    }

    fn description(&self) -> &'static str {
        "Isoperimetric quotient of the largest lesion contour"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        compactness(&input)
    }
}

/// Compute `perimeter^2 / (4 * pi * area)` for the largest-area contour
/// of the mask.
///
/// The mask is re-binarized at its Otsu level first so the same routine
/// accepts grayscale segmentation output; for an already binary mask the
/// split is a no-op. Fails with [`Error::NoContour`] when no contour with
/// positive enclosed area exists.
pub fn compactness(mask: &Mask) -> Result<f64> {
    let level = otsu_level(mask);
    let binary = threshold_binary(mask, level);

    let contours = find_contours(&binary);
    let largest = contours
        .iter()
        .map(|contour| (contour.area(), contour))
        .fold(None::<(f64, &Contour)>, |best, candidate| match best {
            // Strict comparison keeps the first contour on ties, and scan
            // order makes that deterministic
            Some((area, _)) if area >= candidate.0 => best,
            _ => Some(candidate),
        });

    match largest {
        Some((area, contour)) if area > 0.0 => {
            let perimeter = contour.perimeter();
            let score = perimeter * perimeter / (4.0 * std::f64::consts::PI * area);
            debug!(area, perimeter, score, "compactness");
            Ok(score)
        }
        _ => Err(Error::NoContour),
    }
}
