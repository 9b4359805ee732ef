//! Candidate blob marking
//!
//! Enhancement chain over the grayscale image: contrast-limited
//! equalization, median denoise, inverted adaptive threshold, then a
//! small opening. Surviving blobs that are large enough, round enough
//! and clear of the image border get a filled green marker painted over
//! them; everything outside the lesion mask is blanked afterwards.

use dermafeat_core::{BgrImage, Mask, Result};
use tracing::debug;

use crate::color::bgr_to_gray;
use crate::contour::find_contours;
use crate::filter::{adaptive_threshold, clahe, median_blur, ClaheParams};
use crate::morphology::{opening, StructuringElement};
use crate::thresholds::{
    ADAPTIVE_BLOCK, ADAPTIVE_OFFSET, MARKER_BGR, MEDIAN_KSIZE, MIN_CIRCULARITY, MIN_REGION_AREA,
    OPEN_RADIUS,
};

/// Mark dot/globule candidates with filled green circles.
///
/// The returned image is the input with one marker circle per accepted
/// candidate, with every pixel outside the lesion mask set to black. The
/// mask is nearest-resampled to the image resolution when their shapes
/// differ.
pub fn mark_candidates(image: &BgrImage, mask: &Mask) -> Result<BgrImage> {
    mark_candidates_with(image, mask, MIN_REGION_AREA, MIN_CIRCULARITY)
}

pub(super) fn mark_candidates_with(
    image: &BgrImage,
    mask: &Mask,
    min_candidate_area: f64,
    min_circularity: f64,
) -> Result<BgrImage> {
    let (rows, cols) = image.shape();

    let gray = bgr_to_gray(image)?;
    let equalized = clahe(&gray, &ClaheParams::default())?;
    let blurred = median_blur(&equalized, MEDIAN_KSIZE)?;
    let binary = adaptive_threshold(&blurred, ADAPTIVE_BLOCK, ADAPTIVE_OFFSET)?;
    let opened = opening(&binary, &StructuringElement::Square(OPEN_RADIUS))?;

    let mut annotated = image.clone();
    let mut accepted = 0usize;
    for contour in find_contours(&opened) {
        if contour.area() <= min_candidate_area {
            continue;
        }
        if contour.circularity() <= min_circularity {
            continue;
        }
        let Some(bbox) = contour.bounding_box() else {
            continue;
        };
        // Candidates touching or hugging the image border are mask
        // artifacts, not globules
        if bbox.row <= 1 || bbox.col <= 1 {
            continue;
        }
        if bbox.row + bbox.height + 1 >= rows || bbox.col + bbox.width + 1 >= cols {
            continue;
        }

        let center = (bbox.row + bbox.height / 2, bbox.col + bbox.width / 2);
        let radius = (bbox.width + bbox.height) / 2;
        draw_filled_circle(&mut annotated, center, radius, MARKER_BGR);
        accepted += 1;
    }
    debug!(candidates = accepted, "dot candidates marked");

    let mask = if mask.shape() != (rows, cols) {
        mask.resize_nearest(rows, cols)?
    } else {
        mask.clone()
    };
    for r in 0..rows {
        for c in 0..cols {
            if unsafe { mask.get_unchecked(r, c) } == 0 {
                unsafe { annotated.set_pixel_unchecked(r, c, [0, 0, 0]) };
            }
        }
    }

    Ok(annotated)
}

/// Paint a filled circle, clipped to the image bounds.
fn draw_filled_circle(image: &mut BgrImage, center: (usize, usize), radius: usize, bgr: [u8; 3]) {
    let (rows, cols) = image.shape();
    let (cr, cc) = (center.0 as isize, center.1 as isize);
    let radius = radius as isize;
    for dr in -radius..=radius {
        let r = cr + dr;
        if r < 0 || r >= rows as isize {
            continue;
        }
        for dc in -radius..=radius {
            let c = cc + dc;
            if c < 0 || c >= cols as isize {
                continue;
            }
            if dr * dr + dc * dc <= radius * radius {
                unsafe { image.set_pixel_unchecked(r as usize, c as usize, bgr) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dermafeat_core::Grid;

    fn globule_image(center: (usize, usize), radius: f64) -> BgrImage {
        BgrImage::from_fn(120, 120, |r, c| {
            let dr = r as f64 - center.0 as f64;
            let dc = c as f64 - center.1 as f64;
            if dr * dr + dc * dc <= radius * radius {
                [30, 30, 30]
            } else {
                [200, 200, 200]
            }
        })
    }

    fn count_marker_pixels(image: &BgrImage) -> usize {
        let (rows, cols) = image.shape();
        let mut n = 0;
        for r in 0..rows {
            for c in 0..cols {
                if image.pixel(r, c).unwrap() == MARKER_BGR {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_marker_painted_over_globule() {
        let image = globule_image((60, 60), 9.0);
        let mask = Grid::filled(120, 120, 255u8);
        let annotated = mark_candidates(&image, &mask).unwrap();
        assert!(count_marker_pixels(&annotated) > 100);
        // The marker covers the globule center
        assert_eq!(annotated.pixel(60, 60).unwrap(), MARKER_BGR);
    }

    #[test]
    fn test_no_marker_on_flat_image() {
        let image = BgrImage::filled(120, 120, [180, 180, 180]);
        let mask = Grid::filled(120, 120, 255u8);
        let annotated = mark_candidates(&image, &mask).unwrap();
        assert_eq!(count_marker_pixels(&annotated), 0);
    }

    #[test]
    fn test_border_hugging_blob_rejected() {
        // Globule bleeding into the top-left corner: its bounding box
        // starts at the border, so no marker is drawn
        let image = globule_image((4, 4), 9.0);
        let mask = Grid::filled(120, 120, 255u8);
        let annotated = mark_candidates(&image, &mask).unwrap();
        assert_eq!(count_marker_pixels(&annotated), 0);
    }

    #[test]
    fn test_mask_blanks_outside_pixels() {
        let image = globule_image((60, 60), 9.0);
        let mask = Grid::from_fn(120, 120, |r, _| if r < 60 { 0u8 } else { 255 });
        let annotated = mark_candidates(&image, &mask).unwrap();
        // Top half is blanked, including any marker pixels there
        for c in 0..120 {
            assert_eq!(annotated.pixel(10, c).unwrap(), [0, 0, 0]);
        }
    }

    #[test]
    fn test_filled_circle_is_clipped() {
        let mut image = BgrImage::filled(20, 20, [0, 0, 0]);
        draw_filled_circle(&mut image, (0, 0), 30, [0, 255, 0]);
        // Fully painted despite the circle extending past every edge
        assert_eq!(image.pixel(19, 19).unwrap(), [0, 255, 0]);
    }
}
