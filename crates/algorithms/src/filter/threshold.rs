//! Global and locally adaptive binarization

use dermafeat_core::{Error, Grid, Result};
use rayon::prelude::*;

/// Otsu's automatic threshold: the level maximizing between-class variance
/// of the grid's intensity histogram.
pub fn otsu_level(grid: &Grid<u8>) -> u8 {
    let mut histogram = [0u64; 256];
    for &v in grid.data().iter() {
        histogram[v as usize] += 1;
    }

    let total: u64 = grid.len() as u64;
    if total == 0 {
        return 0;
    }

    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64)
        .sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best_level = 0u8;
    let mut best_variance = 0.0f64;

    for level in 0..256usize {
        weight_bg += histogram[level] as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total as f64 - weight_bg;
        if weight_fg == 0.0 {
            break;
        }

        sum_bg += level as f64 * histogram[level] as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let diff = mean_bg - mean_fg;
        let variance = weight_bg * weight_fg * diff * diff;

        if variance > best_variance {
            best_variance = variance;
            best_level = level as u8;
        }
    }

    best_level
}

/// Fixed-level binarization: cells strictly above `level` become 255.
pub fn threshold_binary(grid: &Grid<u8>, level: u8) -> Grid<u8> {
    let (rows, cols) = grid.shape();
    Grid::from_fn(rows, cols, |r, c| {
        if unsafe { grid.get_unchecked(r, c) } > level {
            255
        } else {
            0
        }
    })
}

/// Inverted adaptive binarization against a Gaussian-weighted local mean.
///
/// The per-cell threshold is the Gaussian-blurred neighborhood mean (square
/// window `block`, replicated borders) minus `offset`; cells at or below
/// their threshold become 255, cells above become 0. This picks out locally
/// dark structures (dots, globules) regardless of global illumination.
pub fn adaptive_threshold(grid: &Grid<u8>, block: usize, offset: f64) -> Result<Grid<u8>> {
    if block < 3 || block % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "block",
            value: block.to_string(),
            reason: "adaptive threshold block must be odd and at least 3".to_string(),
        });
    }

    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Ok(grid.clone());
    }

    let kernel = gaussian_kernel(block);
    let radius = (block / 2) as isize;

    // Separable blur: horizontal pass, then vertical, both with
    // replicated borders.
    let horizontal: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0.0f64; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let mut acc = 0.0;
                for (k, &w) in kernel.iter().enumerate() {
                    let nc = (col as isize + k as isize - radius).clamp(0, cols as isize - 1);
                    acc += w * unsafe { grid.get_unchecked(row, nc as usize) } as f64;
                }
                *out = acc;
            }
            row_data
        })
        .collect();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let mut mean = 0.0;
                for (k, &w) in kernel.iter().enumerate() {
                    let nr = (row as isize + k as isize - radius).clamp(0, rows as isize - 1);
                    mean += w * horizontal[nr as usize * cols + col];
                }
                let value = unsafe { grid.get_unchecked(row, col) } as f64;
                *out = if value > mean - offset { 0 } else { 255 };
            }
            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}

/// Normalized 1D Gaussian for a given odd kernel size, sigma derived from
/// the size with the usual `0.3*((k-1)*0.5 - 1) + 0.8` rule.
fn gaussian_kernel(ksize: usize) -> Vec<f64> {
    let sigma = 0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (ksize / 2) as f64;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f64> = (0..ksize)
        .map(|i| {
            let d = i as f64 - center;
            (-d * d / denom).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}
