//! Binary morphological erosion
//!
//! A foreground cell survives only where every cell under the structuring
//! element is foreground. Cells beyond the grid edge count as background.

use dermafeat_core::{Algorithm, Error, Grid, Result};
use rayon::prelude::*;

use super::element::StructuringElement;

/// Parameters for binary erosion
#[derive(Debug, Clone, Default)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Grid<u8>;
    type Output = Grid<u8>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Binary morphological erosion over a structuring element"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element)
    }
}

/// Perform binary erosion on a grid.
///
/// Output cells are 255 where every cell under the element is nonzero and
/// inside the grid, 0 elsewhere.
pub fn erode(grid: &Grid<u8>, element: &StructuringElement) -> Result<Grid<u8>> {
    element.validate()?;

    let (rows, cols) = grid.shape();
    let offsets = element.offsets();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];

            for (col, out) in row_data.iter_mut().enumerate() {
                if unsafe { grid.get_unchecked(row, col) } == 0 {
                    continue;
                }

                let r = row as isize;
                let c = col as isize;
                let mut survives = true;

                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        survives = false;
                        break;
                    }
                    if unsafe { grid.get_unchecked(nr as usize, nc as usize) } == 0 {
                        survives = false;
                        break;
                    }
                }

                if survives {
                    *out = 255;
                }
            }

            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_square(size: usize, top: usize, left: usize, side: usize) -> Grid<u8> {
        Grid::from_fn(size, size, |r, c| {
            if r >= top && r < top + side && c >= left && c < left + side {
                255
            } else {
                0
            }
        })
    }

    #[test]
    fn test_erode_shrinks_square() {
        let grid = filled_square(10, 2, 2, 5);
        let out = erode(&grid, &StructuringElement::Square(1)).unwrap();
        // 5x5 square erodes to 3x3
        assert_eq!(out.count_nonzero(), 9);
        assert_eq!(out.get(3, 3).unwrap(), 255);
        assert_eq!(out.get(2, 2).unwrap(), 0);
    }

    #[test]
    fn test_erode_cross_keeps_more_than_square() {
        let grid = filled_square(10, 2, 2, 5);
        let cross = erode(&grid, &StructuringElement::Cross(1)).unwrap();
        let square = erode(&grid, &StructuringElement::Square(1)).unwrap();
        assert!(cross.count_nonzero() >= square.count_nonzero());
    }

    #[test]
    fn test_erode_at_grid_edge() {
        // Full-frame foreground: only the 1-cell border erodes away
        let grid = Grid::filled(6, 6, 255u8);
        let out = erode(&grid, &StructuringElement::Square(1)).unwrap();
        assert_eq!(out.count_nonzero(), 16);
        assert_eq!(out.get(0, 0).unwrap(), 0);
        assert_eq!(out.get(1, 1).unwrap(), 255);
    }

    #[test]
    fn test_erode_removes_isolated_cell() {
        let mut grid: Grid<u8> = Grid::new(8, 8);
        grid.set(4, 4, 255).unwrap();
        let out = erode(&grid, &StructuringElement::Square(1)).unwrap();
        assert_eq!(out.count_nonzero(), 0);
    }
}
