//! Color region counting

use dermafeat_core::{Algorithm, BgrImage, Error, Grid, Mask, Result};
use rayon::prelude::*;
use tracing::debug;

use super::bands::CATALOG;
use super::convert::hsv_in_range;
use crate::contour::find_contours;
use crate::thresholds::MIN_REGION_AREA;

/// Parameters for the color classifier
#[derive(Debug, Clone)]
pub struct ColorCountParams {
    /// Minimum enclosed contour area for a color region to count
    pub min_region_area: f64,
}

impl Default for ColorCountParams {
    fn default() -> Self {
        Self {
            min_region_area: MIN_REGION_AREA,
        }
    }
}

/// Color classifier
#[derive(Debug, Clone, Default)]
pub struct ColorCount;

impl Algorithm for ColorCount {
    type Input = (BgrImage, Mask);
    type Output = u8;
    type Params = ColorCountParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "ColorCount"
    }

    fn description(&self) -> &'static str {
        "Number of distinct clinically relevant colors inside the lesion"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        count_colors_with(&input.0, &input.1, params.min_region_area)
    }
}

/// Count the distinct catalog colors present inside the lesion.
///
/// For each band: HSV in-range pixels ∧ lesion mask → external contours →
/// band is present iff any contour encloses more than the area threshold
/// (small blobs are sensor noise). The mask is nearest-resampled to the
/// image resolution when their shapes differ. `red`/`red2` together count
/// once. Output range 0..=6.
pub fn count_colors(image: &BgrImage, mask: &Mask) -> Result<u8> {
    count_colors_with(image, mask, MIN_REGION_AREA)
}

fn count_colors_with(image: &BgrImage, mask: &Mask, min_region_area: f64) -> Result<u8> {
    let (rows, cols) = image.shape();
    let mask = if mask.shape() != (rows, cols) {
        mask.resize_nearest(rows, cols)?
    } else {
        mask.clone()
    };

    let present: Vec<&'static str> = CATALOG
        .par_iter()
        .map(|band| -> Result<Option<&'static str>> {
            let roi = hsv_in_range(image, band.lower(), band.upper())?;
            let masked = intersect(&roi, &mask);
            let found = find_contours(&masked)
                .iter()
                .any(|contour| contour.area() > min_region_area);
            Ok(found.then_some(band.name))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    let mut count = present.len();
    if present.contains(&"red") && present.contains(&"red2") {
        // One semantic color split across the hue wraparound
        count -= 1;
    }

    debug!(bands = ?present, count, "color bands present");
    Ok(count as u8)
}

/// Keep ROI cells that also lie inside the lesion mask.
fn intersect(roi: &Grid<u8>, mask: &Mask) -> Grid<u8> {
    let (rows, cols) = roi.shape();
    Grid::from_fn(rows, cols, |r, c| {
        let in_roi = unsafe { roi.get_unchecked(r, c) } != 0;
        let in_mask = unsafe { mask.get_unchecked(r, c) } != 0;
        if in_roi && in_mask {
            255
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_mask(rows: usize, cols: usize) -> Mask {
        Grid::filled(rows, cols, 255u8)
    }

    #[test]
    fn test_all_white_image_counts_one() {
        let image = BgrImage::filled(40, 40, [255, 255, 255]);
        assert_eq!(count_colors(&image, &full_mask(40, 40)).unwrap(), 1);
    }

    #[test]
    fn test_pure_red_not_double_counted() {
        // Hue 0 red matches `red`; a wrapped red patch matches `red2`;
        // together they still count as one color
        let image = BgrImage::from_fn(40, 80, |_, c| {
            if c < 40 {
                [0, 0, 255] // hue 0
            } else {
                [40, 0, 255] // hue ~175
            }
        });
        assert_eq!(count_colors(&image, &full_mask(40, 80)).unwrap(), 1);
    }

    #[test]
    fn test_two_distinct_colors() {
        let image = BgrImage::from_fn(40, 80, |_, c| {
            if c < 40 {
                [255, 255, 255] // white
            } else {
                [200, 100, 100] // blue-gray hue 120
            }
        });
        assert_eq!(count_colors(&image, &full_mask(40, 80)).unwrap(), 2);
    }

    #[test]
    fn test_small_regions_filtered() {
        // A 6x6 white patch on black: enclosed area 25 <= 100, so only
        // black counts
        let image = BgrImage::from_fn(60, 60, |r, c| {
            if (10..16).contains(&r) && (10..16).contains(&c) {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            }
        });
        assert_eq!(count_colors(&image, &full_mask(60, 60)).unwrap(), 1);
    }

    #[test]
    fn test_mask_limits_regions() {
        // White left half, black right half, mask only over the right:
        // white never intersects the lesion
        let image = BgrImage::from_fn(40, 80, |_, c| {
            if c < 40 {
                [255, 255, 255]
            } else {
                [0, 0, 0]
            }
        });
        let mask = Grid::from_fn(40, 80, |_, c| if c >= 40 { 255u8 } else { 0 });
        assert_eq!(count_colors(&image, &mask).unwrap(), 1);
    }

    #[test]
    fn test_mask_resized_to_image() {
        let image = BgrImage::filled(40, 40, [255, 255, 255]);
        let mask = full_mask(20, 20);
        assert_eq!(count_colors(&image, &mask).unwrap(), 1);
    }

    #[test]
    fn test_empty_mask_resample_fails() {
        let image = BgrImage::filled(10, 10, [255, 255, 255]);
        let mask: Mask = Grid::new(0, 0);
        assert!(matches!(
            count_colors(&image, &mask),
            Err(Error::SizeMismatch { .. })
        ));
    }
}
