//! Binary mathematical morphology
//!
//! Morphological operations on binary grids (0 = background, nonzero =
//! foreground), used for mask border extraction and speckle removal:
//! - **Erosion**: foreground survives only where the whole element fits
//! - **Dilation**: foreground grows over the element neighborhood
//! - **Opening**: erosion then dilation (removes small foreground specks)
//!
//! Cells outside the grid count as background, so foreground touching the
//! frame edge is eroded there.

mod dilate;
mod element;
mod erode;
mod opening;

pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use opening::{opening, Opening, OpeningParams};
