//! Clinically relevant color band catalog
//!
//! Inclusive HSV ranges derived from the dermoscopy literature (not
//! learned). `red` and `red2` are the two halves of one semantic color
//! split across the hue wraparound and are deduplicated when counting.

/// A named inclusive HSV range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    /// Clinical color name
    pub name: &'static str,
    /// Inclusive hue range, 0..=179
    pub hue: (u8, u8),
    /// Inclusive saturation range
    pub sat: (u8, u8),
    /// Inclusive value range
    pub val: (u8, u8),
}

impl ColorBand {
    /// Whether an [h, s, v] pixel falls in this band.
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        hsv[0] >= self.hue.0
            && hsv[0] <= self.hue.1
            && hsv[1] >= self.sat.0
            && hsv[1] <= self.sat.1
            && hsv[2] >= self.val.0
            && hsv[2] <= self.val.1
    }

    /// Lower [h, s, v] bound.
    pub fn lower(&self) -> [u8; 3] {
        [self.hue.0, self.sat.0, self.val.0]
    }

    /// Upper [h, s, v] bound.
    pub fn upper(&self) -> [u8; 3] {
        [self.hue.1, self.sat.1, self.val.1]
    }
}

/// The process-wide, read-only band catalog.
pub const CATALOG: [ColorBand; 7] = [
    ColorBand { name: "white", hue: (0, 179), sat: (0, 50), val: (150, 255) },
    ColorBand { name: "red", hue: (0, 5), sat: (50, 255), val: (50, 255) },
    ColorBand { name: "red2", hue: (170, 179), sat: (50, 255), val: (50, 255) },
    ColorBand { name: "light_brown", hue: (10, 30), sat: (50, 255), val: (50, 255) },
    ColorBand { name: "dark_brown", hue: (0, 20), sat: (50, 255), val: (50, 150) },
    ColorBand { name: "blue_gray", hue: (90, 120), sat: (50, 255), val: (50, 255) },
    ColorBand { name: "black", hue: (0, 179), sat: (0, 255), val: (0, 30) },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::bgr_to_hsv_pixel;

    fn band(name: &str) -> &'static ColorBand {
        CATALOG.iter().find(|b| b.name == name).unwrap()
    }

    #[test]
    fn test_catalog_names() {
        let names: Vec<_> = CATALOG.iter().map(|b| b.name).collect();
        assert_eq!(
            names,
            ["white", "red", "red2", "light_brown", "dark_brown", "blue_gray", "black"]
        );
    }

    #[test]
    fn test_white_matches_white_pixel() {
        let hsv = bgr_to_hsv_pixel([255, 255, 255]);
        assert!(band("white").contains(hsv));
        assert!(!band("black").contains(hsv));
    }

    #[test]
    fn test_pure_red_matches_only_low_half() {
        // Hue exactly 0: in `red`, not in `red2`
        let hsv = bgr_to_hsv_pixel([0, 0, 255]);
        assert!(band("red").contains(hsv));
        assert!(!band("red2").contains(hsv));
    }

    #[test]
    fn test_wrapped_red_matches_high_half() {
        let hsv = bgr_to_hsv_pixel([40, 0, 255]); // hue ~175
        assert!(band("red2").contains(hsv));
        assert!(!band("red").contains(hsv));
    }

    #[test]
    fn test_black_pixel() {
        let hsv = bgr_to_hsv_pixel([10, 10, 10]);
        assert!(band("black").contains(hsv));
    }

    #[test]
    fn test_dark_brown_overlaps_red_hues() {
        // A dark saturated red-brown sits in both red and dark_brown; the
        // catalog intentionally allows overlapping bands
        let hsv = [3u8, 200, 100];
        assert!(band("red").contains(hsv));
        assert!(band("dark_brown").contains(hsv));
    }
}
