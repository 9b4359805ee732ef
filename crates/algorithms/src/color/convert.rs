//! Color space conversions
//!
//! 8-bit conversions: hue lives in `0..=179` (degrees halved), saturation
//! and value in `0..=255`, grayscale uses the BT.601 luma weights.

use dermafeat_core::{BgrImage, Grid, Result};
use rayon::prelude::*;

/// Convert one [b, g, r] pixel to [h, s, v].
pub fn bgr_to_hsv_pixel(bgr: [u8; 3]) -> [u8; 3] {
    let (b, g, r) = (bgr[0] as f64, bgr[1] as f64, bgr[2] as f64);
    let v = b.max(g).max(r);
    let min = b.min(g).min(r);
    let diff = v - min;

    let s = if v == 0.0 {
        0.0
    } else {
        255.0 * diff / v
    };

    let h = if diff == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    let h = if h < 0.0 { h + 360.0 } else { h };

    [
        ((h / 2.0).round() as i32).rem_euclid(180) as u8,
        s.round() as u8,
        v.round() as u8,
    ]
}

/// Convert a BGR image to grayscale with BT.601 weights.
pub fn bgr_to_gray(image: &BgrImage) -> Result<Grid<u8>> {
    let (rows, cols) = image.shape();
    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let [b, g, r] = unsafe { image.pixel_unchecked(row, col) };
                let y = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
                *out = y.round().clamp(0.0, 255.0) as u8;
            }
            row_data
        })
        .collect();

    Grid::from_vec(data, rows, cols)
}

/// Binary region-of-interest grid of pixels whose HSV value lies in the
/// inclusive `[lower, upper]` band (per-channel).
pub fn hsv_in_range(image: &BgrImage, lower: [u8; 3], upper: [u8; 3]) -> Result<Grid<u8>> {
    let (rows, cols) = image.shape();
    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let hsv = bgr_to_hsv_pixel(unsafe { image.pixel_unchecked(row, col) });
                let inside = (0..3).all(|i| hsv[i] >= lower[i] && hsv[i] <= upper[i]);
                if inside {
                    *out = 255;
                }
            }
            row_data
        })
        .collect();

    Grid::from_vec(data, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        // Pure red: hue 0
        assert_eq!(bgr_to_hsv_pixel([0, 0, 255]), [0, 255, 255]);
        // Pure green: hue 120 degrees -> 60
        assert_eq!(bgr_to_hsv_pixel([0, 255, 0]), [60, 255, 255]);
        // Pure blue: hue 240 degrees -> 120
        assert_eq!(bgr_to_hsv_pixel([255, 0, 0]), [120, 255, 255]);
    }

    #[test]
    fn test_grays_have_zero_saturation() {
        assert_eq!(bgr_to_hsv_pixel([0, 0, 0]), [0, 0, 0]);
        assert_eq!(bgr_to_hsv_pixel([255, 255, 255]), [0, 0, 255]);
        assert_eq!(bgr_to_hsv_pixel([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn test_near_red_wraps_high() {
        // Slightly blue-shifted red sits just below the hue wrap
        let [h, _, _] = bgr_to_hsv_pixel([40, 0, 255]);
        assert!(h >= 170, "h = {h}");
    }

    #[test]
    fn test_gray_weights() {
        let img = BgrImage::filled(2, 2, [0, 0, 255]); // pure red
        let gray = bgr_to_gray(&img).unwrap();
        assert_eq!(gray.get(0, 0).unwrap(), 76); // round(0.299 * 255)

        let img = BgrImage::filled(2, 2, [255, 255, 255]);
        let gray = bgr_to_gray(&img).unwrap();
        assert_eq!(gray.get(0, 0).unwrap(), 255);
    }

    #[test]
    fn test_in_range_inclusive_bounds() {
        let img = BgrImage::filled(2, 2, [0, 255, 0]); // hue exactly 60
        let hit = hsv_in_range(&img, [60, 0, 0], [60, 255, 255]).unwrap();
        assert_eq!(hit.count_nonzero(), 4);
        let miss = hsv_in_range(&img, [61, 0, 0], [80, 255, 255]).unwrap();
        assert_eq!(miss.count_nonzero(), 0);
    }
}
