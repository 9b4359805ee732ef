//! Policy constants for the feature-extraction pipeline.
//!
//! These thresholds are the entire tunable surface of the system; keeping
//! them in one place instead of scattered through the analyzers makes the
//! output of the pipeline auditable. `*Params` structs default from these
//! values.

/// Minimum enclosed contour area (px²) for a region to count, both for
/// color-band presence and for dot/globule candidates.
pub const MIN_REGION_AREA: f64 = 100.0;

/// Minimum circularity (4π·area/perimeter²) for a dot/globule candidate.
pub const MIN_CIRCULARITY: f64 = 0.1;

/// Asymmetry score below this is level 1 (fully symmetric).
pub const SYMMETRY_LEVEL_1_MAX: f64 = 0.1;

/// Asymmetry score below this (and at/above level 1) is level 2.
pub const SYMMETRY_LEVEL_2_MAX: f64 = 0.3;

/// Margin (px) added to the centroid-to-border distance when sizing the
/// square symmetry frame.
pub const FRAME_MARGIN: usize = 10;

// Candidate-marking stage (dots)

/// CLAHE contrast clip limit.
pub const CLAHE_CLIP_LIMIT: f64 = 2.0;
/// CLAHE tile grid (rows, cols).
pub const CLAHE_TILES: (usize, usize) = (8, 8);
/// Median blur kernel size (square, odd).
pub const MEDIAN_KSIZE: usize = 5;
/// Adaptive threshold neighborhood size (square, odd).
pub const ADAPTIVE_BLOCK: usize = 25;
/// Adaptive threshold offset subtracted from the local weighted mean.
pub const ADAPTIVE_OFFSET: f64 = 8.0;
/// Opening kernel radius after thresholding (radius 1 = 3×3 square).
pub const OPEN_RADIUS: usize = 1;
/// Marker color drawn over accepted candidates, BGR.
pub const MARKER_BGR: [u8; 3] = [0, 255, 0];

// Circle-confirmation stage (dots)

/// Marker green band in HSV: (h, s, v) lower bound, inclusive.
pub const GREEN_LOWER: [u8; 3] = [40, 50, 50];
/// Marker green band in HSV: (h, s, v) upper bound, inclusive.
pub const GREEN_UPPER: [u8; 3] = [80, 255, 255];
/// Hough: minimum distance (px) between detected circle centers.
pub const HOUGH_MIN_DIST: f64 = 20.0;
/// Hough: gradient-magnitude edge threshold.
pub const HOUGH_EDGE_THRESHOLD: f64 = 50.0;
/// Hough: minimum accumulator support for a circle.
pub const HOUGH_ACC_THRESHOLD: u32 = 30;
/// Hough: detectable radius range (px), inclusive.
pub const HOUGH_RADIUS_RANGE: (usize, usize) = (10, 200);
