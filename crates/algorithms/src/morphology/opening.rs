//! Binary morphological opening (erosion followed by dilation)
//!
//! Removes foreground specks smaller than the structuring element while
//! preserving the overall shape and size of larger regions.

use dermafeat_core::{Algorithm, Error, Grid, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for binary opening
#[derive(Debug, Clone, Default)]
pub struct OpeningParams {
    /// Structuring element shape
    pub element: StructuringElement,
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Algorithm for Opening {
    type Input = Grid<u8>;
    type Output = Grid<u8>;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Binary opening (erosion then dilation, removes small specks)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.element)
    }
}

/// Perform binary opening on a grid.
pub fn opening(grid: &Grid<u8>, element: &StructuringElement) -> Result<Grid<u8>> {
    let eroded = erode(grid, element)?;
    dilate(&eroded, element)
}
