//! Lesion shape asymmetry scoring
//!
//! Folds the square symmetry frame along four axes (vertical, horizontal,
//! both diagonals) and scores each fold by the share of lesion area that
//! fails to land on itself. The emitted feature is a ternary level, not
//! the raw ratio.

use dermafeat_core::{Algorithm, Error, Grid, Mask, Result};

use crate::geometry::symmetry_frame;
use crate::thresholds::{SYMMETRY_LEVEL_1_MAX, SYMMETRY_LEVEL_2_MAX};

/// Ternary asymmetry classification emitted as the shape feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsymmetryLevel {
    /// Symmetric along every tested axis
    Symmetric = 1,
    /// Symmetric along one axis only
    SingleAxis = 2,
    /// Asymmetric
    Asymmetric = 3,
}

impl AsymmetryLevel {
    /// Classify a mean asymmetry score.
    pub fn from_score(score: f64) -> Self {
        if score < SYMMETRY_LEVEL_1_MAX {
            AsymmetryLevel::Symmetric
        } else if score < SYMMETRY_LEVEL_2_MAX {
            AsymmetryLevel::SingleAxis
        } else {
            AsymmetryLevel::Asymmetric
        }
    }

    /// Numeric feature value (1..=3).
    pub fn level(self) -> u8 {
        self as u8
    }
}

/// Parameters for the symmetry analyzer
#[derive(Debug, Clone)]
pub struct SymmetryParams {
    /// Scores below this are level 1
    pub level_1_max: f64,
    /// Scores below this (and at/above `level_1_max`) are level 2
    pub level_2_max: f64,
}

impl Default for SymmetryParams {
    fn default() -> Self {
        Self {
            level_1_max: SYMMETRY_LEVEL_1_MAX,
            level_2_max: SYMMETRY_LEVEL_2_MAX,
        }
    }
}

/// Symmetry analyzer
#[derive(Debug, Clone, Default)]
pub struct Symmetry;

impl Algorithm for Symmetry {
    type Input = Mask;
    type Output = AsymmetryLevel;
    type Params = SymmetryParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Symmetry"
    }

    fn description(&self) -> &'static str {
        "Bilateral/diagonal shape asymmetry level of the lesion mask"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let score = asymmetry_score(&input)?;
        Ok(if score < params.level_1_max {
            AsymmetryLevel::Symmetric
        } else if score < params.level_2_max {
            AsymmetryLevel::SingleAxis
        } else {
            AsymmetryLevel::Asymmetric
        })
    }
}

/// Mean asymmetry ratio over the four fold axes.
///
/// Each ratio is `2 * mismatched cells / lesion area`; mismatches are
/// counted between one half of the frame and the mirrored other half.
/// Fails with [`Error::DegenerateMask`] on a zero-area mask.
pub fn asymmetry_score(mask: &Mask) -> Result<f64> {
    let frame = symmetry_frame(mask)?;
    let area = mask.count_nonzero() as f64;

    let ratios = [
        vertical_ratio(&frame, area),
        horizontal_ratio(&frame, area),
        down_diagonal_ratio(&frame, area),
        up_diagonal_ratio(&frame, area),
    ];

    Ok(ratios.iter().sum::<f64>() / ratios.len() as f64)
}

/// Classify the mask's asymmetry with the default cutoffs.
pub fn asymmetry_level(mask: &Mask) -> Result<AsymmetryLevel> {
    Ok(AsymmetryLevel::from_score(asymmetry_score(mask)?))
}

/// Left half vs. horizontally mirrored right half.
fn vertical_ratio(frame: &Grid<u8>, area: f64) -> f64 {
    let (rows, cols) = frame.shape();
    let half = cols / 2;
    let mut mismatches = 0u64;
    for r in 0..rows {
        for i in 0..half {
            let right = unsafe { frame.get_unchecked(r, half + i) };
            let mirrored_left = unsafe { frame.get_unchecked(r, half - 1 - i) };
            mismatches += u64::from(right != mirrored_left);
        }
    }
    2.0 * mismatches as f64 / area
}

/// Top half vs. vertically mirrored bottom half.
fn horizontal_ratio(frame: &Grid<u8>, area: f64) -> f64 {
    let (rows, cols) = frame.shape();
    let half = rows / 2;
    let mut mismatches = 0u64;
    for i in 0..half {
        for c in 0..cols {
            let bottom = unsafe { frame.get_unchecked(half + i, c) };
            let mirrored_top = unsafe { frame.get_unchecked(half - 1 - i, c) };
            mismatches += u64::from(bottom != mirrored_top);
        }
    }
    2.0 * mismatches as f64 / area
}

/// Lower triangle vs. transposed upper triangle (fold along the main
/// diagonal). Diagonal cells always match themselves.
fn down_diagonal_ratio(frame: &Grid<u8>, area: f64) -> f64 {
    let rows = frame.rows();
    let mut mismatches = 0u64;
    for r in 1..rows {
        for c in 0..r {
            let lower = unsafe { frame.get_unchecked(r, c) };
            let upper = unsafe { frame.get_unchecked(c, r) };
            mismatches += u64::from(lower != upper);
        }
    }
    2.0 * mismatches as f64 / area
}

/// Same fold after flipping the frame left-right, so the anti-diagonal
/// becomes the main diagonal.
fn up_diagonal_ratio(frame: &Grid<u8>, area: f64) -> f64 {
    let (rows, cols) = frame.shape();
    let mut mismatches = 0u64;
    for r in 1..rows {
        for c in 0..r {
            let lower = unsafe { frame.get_unchecked(r, cols - 1 - c) };
            let upper = unsafe { frame.get_unchecked(c, cols - 1 - r) };
            mismatches += u64::from(lower != upper);
        }
    }
    2.0 * mismatches as f64 / area
}
