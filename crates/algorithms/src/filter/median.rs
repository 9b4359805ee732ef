//! Median blur

use dermafeat_core::{Error, Grid, Result};
use rayon::prelude::*;

/// Median filter with a square window of the given odd size.
///
/// Borders are handled by clamping window coordinates to the grid
/// (replicated edges), so output dimensions match the input.
pub fn median_blur(grid: &Grid<u8>, ksize: usize) -> Result<Grid<u8>> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "ksize",
            value: ksize.to_string(),
            reason: "median window size must be odd and nonzero".to_string(),
        });
    }

    let (rows, cols) = grid.shape();
    if rows == 0 || cols == 0 {
        return Ok(grid.clone());
    }

    let radius = (ksize / 2) as isize;
    let mid = (ksize * ksize) / 2;

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            let mut window = Vec::with_capacity(ksize * ksize);

            for (col, out) in row_data.iter_mut().enumerate() {
                window.clear();
                for dr in -radius..=radius {
                    let nr = (row as isize + dr).clamp(0, rows as isize - 1) as usize;
                    for dc in -radius..=radius {
                        let nc = (col as isize + dc).clamp(0, cols as isize - 1) as usize;
                        window.push(unsafe { grid.get_unchecked(nr, nc) });
                    }
                }
                window.sort_unstable();
                *out = window[mid];
            }

            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_ksize_rejected() {
        let grid: Grid<u8> = Grid::new(4, 4);
        assert!(median_blur(&grid, 4).is_err());
        assert!(median_blur(&grid, 0).is_err());
    }

    #[test]
    fn test_flat_unchanged() {
        let grid = Grid::filled(6, 6, 77u8);
        let out = median_blur(&grid, 3).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn test_salt_noise_removed() {
        let mut grid = Grid::filled(7, 7, 10u8);
        grid.set(3, 3, 255).unwrap();
        let out = median_blur(&grid, 3).unwrap();
        assert_eq!(out.get(3, 3).unwrap(), 10);
    }

    #[test]
    fn test_edge_preserved_better_than_mean() {
        // Step edge: median keeps the step crisp
        let grid = Grid::from_fn(6, 6, |_, c| if c < 3 { 0u8 } else { 200 });
        let out = median_blur(&grid, 3).unwrap();
        assert_eq!(out.get(2, 0).unwrap(), 0);
        assert_eq!(out.get(2, 5).unwrap(), 200);
        assert_eq!(out.get(2, 2).unwrap(), 0);
        assert_eq!(out.get(2, 3).unwrap(), 200);
    }
}
