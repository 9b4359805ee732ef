//! Marker confirmation
//!
//! Isolates the green marker pixels by HSV range and re-detects them
//! with the circle transform. A candidate blob only survives if the
//! marker painted over it reads back as a circle.

use dermafeat_core::{BgrImage, Result};
use tracing::debug;

use crate::color::hsv_in_range;
use crate::thresholds::{GREEN_LOWER, GREEN_UPPER};

use super::hough::{hough_circles, HoughParams};

/// Whether the annotated image contains at least one circular green
/// marker.
pub fn confirm_circles(annotated: &BgrImage) -> Result<bool> {
    confirm_circles_with(annotated, &HoughParams::default())
}

pub(super) fn confirm_circles_with(annotated: &BgrImage, params: &HoughParams) -> Result<bool> {
    let markers = hsv_in_range(annotated, GREEN_LOWER, GREEN_UPPER)?;
    let circles = hough_circles(&markers, params)?;
    debug!(circles = circles.len(), "marker circles confirmed");
    Ok(!circles.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::MARKER_BGR;

    #[test]
    fn test_marker_disk_confirms() {
        let image = BgrImage::from_fn(100, 100, |r, c| {
            let dr = r as f64 - 50.0;
            let dc = c as f64 - 50.0;
            if dr * dr + dc * dc <= 16.0 * 16.0 {
                MARKER_BGR
            } else {
                [0, 0, 0]
            }
        });
        assert!(confirm_circles(&image).unwrap());
    }

    #[test]
    fn test_plain_image_does_not_confirm() {
        let image = BgrImage::filled(100, 100, [120, 90, 60]);
        assert!(!confirm_circles(&image).unwrap());
    }

    #[test]
    fn test_non_green_disk_does_not_confirm() {
        // Same geometry, wrong color: nothing passes the marker range
        let image = BgrImage::from_fn(100, 100, |r, c| {
            let dr = r as f64 - 50.0;
            let dc = c as f64 - 50.0;
            if dr * dr + dc * dc <= 16.0 * 16.0 {
                [0, 0, 255]
            } else {
                [0, 0, 0]
            }
        });
        assert!(!confirm_circles(&image).unwrap());
    }
}
