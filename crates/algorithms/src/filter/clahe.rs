//! Contrast-limited adaptive histogram equalization (CLAHE)

use dermafeat_core::{Error, Grid, Result};

/// Parameters for CLAHE
#[derive(Debug, Clone)]
pub struct ClaheParams {
    /// Contrast limit as a multiple of the uniform histogram level
    pub clip_limit: f64,
    /// Tile grid as (rows, cols)
    pub tiles: (usize, usize),
}

impl Default for ClaheParams {
    fn default() -> Self {
        Self {
            clip_limit: crate::thresholds::CLAHE_CLIP_LIMIT,
            tiles: crate::thresholds::CLAHE_TILES,
        }
    }
}

/// Contrast-limited adaptive histogram equalization.
///
/// The grid is divided into a tile grid; each tile gets a clipped,
/// equalized intensity mapping, and every cell is bilinearly interpolated
/// between the mappings of the four nearest tile centers. Clipping caps
/// each histogram bin at `clip_limit` times the uniform level and
/// redistributes the excess evenly, which bounds noise amplification in
/// flat regions.
pub fn clahe(grid: &Grid<u8>, params: &ClaheParams) -> Result<Grid<u8>> {
    let (tile_rows, tile_cols) = params.tiles;
    if tile_rows == 0 || tile_cols == 0 {
        return Err(Error::InvalidParameter {
            name: "tiles",
            value: format!("{}x{}", tile_rows, tile_cols),
            reason: "tile grid must be at least 1x1".to_string(),
        });
    }
    if params.clip_limit <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "clip_limit",
            value: params.clip_limit.to_string(),
            reason: "clip limit must be positive".to_string(),
        });
    }

    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Ok(grid.clone());
    }

    let tile_h = rows.div_ceil(tile_rows).max(1);
    let tile_w = cols.div_ceil(tile_cols).max(1);
    let grid_rows = rows.div_ceil(tile_h);
    let grid_cols = cols.div_ceil(tile_w);

    // Per-tile equalization lookup tables
    let mut luts = vec![[0u8; 256]; grid_rows * grid_cols];
    for tr in 0..grid_rows {
        for tc in 0..grid_cols {
            let r0 = tr * tile_h;
            let r1 = (r0 + tile_h).min(rows);
            let c0 = tc * tile_w;
            let c1 = (c0 + tile_w).min(cols);
            luts[tr * grid_cols + tc] = tile_lut(grid, r0, r1, c0, c1, params.clip_limit);
        }
    }

    // Bilinear interpolation between the four surrounding tile mappings
    let output = Grid::from_fn(rows, cols, |r, c| {
        let v = unsafe { grid.get_unchecked(r, c) } as usize;

        let (t0r, t1r, fr) = interp_coords(r, tile_h, grid_rows);
        let (t0c, t1c, fc) = interp_coords(c, tile_w, grid_cols);

        let v00 = luts[t0r * grid_cols + t0c][v] as f64;
        let v01 = luts[t0r * grid_cols + t1c][v] as f64;
        let v10 = luts[t1r * grid_cols + t0c][v] as f64;
        let v11 = luts[t1r * grid_cols + t1c][v] as f64;

        let top = v00 * (1.0 - fc) + v01 * fc;
        let bottom = v10 * (1.0 - fc) + v11 * fc;
        (top * (1.0 - fr) + bottom * fr).round().clamp(0.0, 255.0) as u8
    });

    Ok(output)
}

/// Clipped equalization LUT for one tile region.
fn tile_lut(grid: &Grid<u8>, r0: usize, r1: usize, c0: usize, c1: usize, clip_limit: f64) -> [u8; 256] {
    let mut histogram = [0u64; 256];
    for r in r0..r1 {
        for c in c0..c1 {
            histogram[unsafe { grid.get_unchecked(r, c) } as usize] += 1;
        }
    }

    let area = ((r1 - r0) * (c1 - c0)) as u64;
    let mut lut = [0u8; 256];
    if area == 0 {
        return lut;
    }

    // Clip and evenly redistribute the excess
    let limit = ((clip_limit * area as f64 / 256.0) as u64).max(1);
    let mut excess = 0u64;
    for bin in histogram.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }
    let bonus = excess / 256;
    let leftover = (excess % 256) as usize;
    for (i, bin) in histogram.iter_mut().enumerate() {
        *bin += bonus + u64::from(i < leftover);
    }

    let scale = 255.0 / area as f64;
    let mut cumulative = 0u64;
    for (i, &bin) in histogram.iter().enumerate() {
        cumulative += bin;
        lut[i] = (cumulative as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// For a cell coordinate, the two bracketing tile indices and the
/// interpolation fraction toward the second one. Cells beyond the first or
/// last tile center clamp to that tile.
fn interp_coords(pos: usize, tile_size: usize, tiles: usize) -> (usize, usize, f64) {
    let center_offset = tile_size as f64 / 2.0;
    let t = (pos as f64 - center_offset) / tile_size as f64;
    if t < 0.0 {
        return (0, 0, 0.0);
    }
    let t0 = t as usize;
    if t0 + 1 >= tiles {
        return (tiles - 1, tiles - 1, 0.0);
    }
    (t0, t0 + 1, t - t0 as f64)
}
