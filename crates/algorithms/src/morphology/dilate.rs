//! Binary morphological dilation
//!
//! A cell becomes foreground where any cell under the structuring element
//! is foreground.

use dermafeat_core::{Algorithm, Error, Grid, Result};
use rayon::prelude::*;

use super::element::StructuringElement;

/// Parameters for binary dilation
#[derive(Debug, Clone, Default)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Grid<u8>;
    type Output = Grid<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Binary morphological dilation over a structuring element"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element)
    }
}

/// Perform binary dilation on a grid.
///
/// Output cells are 255 where any in-bounds cell under the element is
/// nonzero, 0 elsewhere.
pub fn dilate(grid: &Grid<u8>, element: &StructuringElement) -> Result<Grid<u8>> {
    element.validate()?;

    let (rows, cols) = grid.shape();
    let offsets = element.offsets();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];

            for (col, out) in row_data.iter_mut().enumerate() {
                let r = row as isize;
                let c = col as isize;

                for &(dr, dc) in &offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    if unsafe { grid.get_unchecked(nr as usize, nc as usize) } != 0 {
                        *out = 255;
                        break;
                    }
                }
            }

            row_data
        })
        .collect();

    Grid::from_vec(output_data, rows, cols)
}
