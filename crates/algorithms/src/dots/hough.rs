//! Gradient circle transform
//!
//! Single-channel circle detection: Sobel gradients pick out edge
//! pixels, each edge pixel votes for possible centers along its
//! gradient line in both directions, and candidate centers are local
//! maxima of the (3x3-pooled) vote grid. Each surviving center is then
//! assigned the radius with the strongest edge support; centers whose
//! support falls short are dropped.

use dermafeat_core::{Error, Grid, Result};

use crate::thresholds::{
    HOUGH_ACC_THRESHOLD, HOUGH_EDGE_THRESHOLD, HOUGH_MIN_DIST, HOUGH_RADIUS_RANGE,
};

/// Parameters for the circle transform
#[derive(Debug, Clone)]
pub struct HoughParams {
    /// Minimum center-to-center distance between reported circles
    pub min_dist: f64,
    /// Gradient magnitude below which a pixel is not an edge
    pub edge_threshold: f64,
    /// Minimum votes for a center and minimum edge support for a radius
    pub acc_threshold: u32,
    /// Inclusive radius search range
    pub radius_range: (usize, usize),
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            min_dist: HOUGH_MIN_DIST,
            edge_threshold: HOUGH_EDGE_THRESHOLD,
            acc_threshold: HOUGH_ACC_THRESHOLD,
            radius_range: HOUGH_RADIUS_RANGE,
        }
    }
}

/// A detected circle in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedCircle {
    pub row: usize,
    pub col: usize,
    pub radius: usize,
}

/// Detect circles in a single-channel grid.
///
/// Results are ordered by decreasing center vote count; ties break in
/// row-major order, so output is deterministic.
pub fn hough_circles(grid: &Grid<u8>, params: &HoughParams) -> Result<Vec<DetectedCircle>> {
    let (min_r, max_r) = params.radius_range;
    if min_r == 0 || min_r > max_r {
        return Err(Error::InvalidParameter {
            name: "radius_range",
            value: format!("{:?}", params.radius_range),
            reason: "min radius must be in 1..=max".into(),
        });
    }
    let (rows, cols) = grid.shape();
    if rows < 3 || cols < 3 {
        return Ok(Vec::new());
    }

    // Edge pixels with their unit gradient direction
    let mut edges: Vec<(usize, usize, f64, f64)> = Vec::new();
    for r in 1..rows - 1 {
        for c in 1..cols - 1 {
            let (gr, gc) = sobel_at(grid, r, c);
            let mag = (gr * gr + gc * gc).sqrt();
            if mag >= params.edge_threshold {
                edges.push((r, c, gr / mag, gc / mag));
            }
        }
    }

    // Vote for centers along the gradient line, both directions
    let mut acc = vec![0u32; rows * cols];
    for &(r, c, dr, dc) in &edges {
        for sign in [-1.0f64, 1.0] {
            for d in min_r..=max_r {
                let vr = (r as f64 + sign * dr * d as f64).round();
                let vc = (c as f64 + sign * dc * d as f64).round();
                if vr < 0.0 || vc < 0.0 || vr >= rows as f64 || vc >= cols as f64 {
                    break;
                }
                acc[vr as usize * cols + vc as usize] += 1;
            }
        }
    }

    // Pool 3x3 neighborhoods so votes split across adjacent cells by
    // rounding still concentrate on the true center
    let pooled = Grid::from_fn(rows, cols, |r, c| {
        let mut sum = 0u32;
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                let (pr, pc) = (r as isize + dr, c as isize + dc);
                if pr >= 0 && pc >= 0 && (pr as usize) < rows && (pc as usize) < cols {
                    sum += acc[pr as usize * cols + pc as usize];
                }
            }
        }
        sum
    });

    let mut candidates: Vec<(u32, usize, usize)> = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let votes = unsafe { pooled.get_unchecked(r, c) };
            if votes < params.acc_threshold {
                continue;
            }
            if is_local_max(&pooled, r, c, votes) {
                candidates.push((votes, r, c));
            }
        }
    }
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

    // Greedy min-distance suppression, strongest centers first
    let mut circles: Vec<DetectedCircle> = Vec::new();
    let min_dist_sq = params.min_dist * params.min_dist;
    for (_, r, c) in candidates {
        let too_close = circles.iter().any(|kept| {
            let dr = kept.row as f64 - r as f64;
            let dc = kept.col as f64 - c as f64;
            dr * dr + dc * dc < min_dist_sq
        });
        if too_close {
            continue;
        }
        if let Some(radius) = best_radius(&edges, (r, c), min_r, max_r, params.acc_threshold) {
            circles.push(DetectedCircle { row: r, col: c, radius });
        }
    }

    Ok(circles)
}

/// 3x3 Sobel response at an interior pixel, as (d/drow, d/dcol).
fn sobel_at(grid: &Grid<u8>, r: usize, c: usize) -> (f64, f64) {
    let at = |dr: isize, dc: isize| -> f64 {
        let (pr, pc) = ((r as isize + dr) as usize, (c as isize + dc) as usize);
        unsafe { grid.get_unchecked(pr, pc) as f64 }
    };
    let gr = (at(1, -1) + 2.0 * at(1, 0) + at(1, 1)) - (at(-1, -1) + 2.0 * at(-1, 0) + at(-1, 1));
    let gc = (at(-1, 1) + 2.0 * at(0, 1) + at(1, 1)) - (at(-1, -1) + 2.0 * at(0, -1) + at(1, -1));
    (gr, gc)
}

fn is_local_max(pooled: &Grid<u32>, r: usize, c: usize, votes: u32) -> bool {
    let (rows, cols) = pooled.shape();
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (pr, pc) = (r as isize + dr, c as isize + dc);
            if pr < 0 || pc < 0 || pr as usize >= rows || pc as usize >= cols {
                continue;
            }
            let other = unsafe { pooled.get_unchecked(pr as usize, pc as usize) };
            // Strict on the lexicographically earlier side keeps plateaus
            // from producing duplicate candidates
            if other > votes || (other == votes && (dr, dc) < (0, 0)) {
                return false;
            }
        }
    }
    true
}

/// Radius with the strongest edge support around a center, if any radius
/// within range gathers at least `min_support` edge pixels (counting the
/// two adjacent radius bins as support).
fn best_radius(
    edges: &[(usize, usize, f64, f64)],
    center: (usize, usize),
    min_r: usize,
    max_r: usize,
    min_support: u32,
) -> Option<usize> {
    let mut bins = vec![0u32; max_r + 2];
    for &(r, c, _, _) in edges {
        let dr = r as f64 - center.0 as f64;
        let dc = c as f64 - center.1 as f64;
        let dist = (dr * dr + dc * dc).sqrt().round() as usize;
        if dist >= min_r && dist <= max_r {
            bins[dist] += 1;
        }
    }

    let mut best: Option<(u32, usize)> = None;
    for radius in min_r..=max_r {
        let support =
            bins[radius] + bins[radius - 1] + bins.get(radius + 1).copied().unwrap_or(0);
        if support >= min_support && best.map_or(true, |(s, _)| support > s) {
            best = Some((support, radius));
        }
    }
    best.map(|(_, radius)| radius)
}
