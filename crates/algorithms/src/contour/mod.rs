//! Contour extraction for binary grids
//!
//! Finds the external boundary of every 8-connected foreground region and
//! exposes the polygon metrics the analyzers filter on (enclosed area,
//! perimeter, bounding box, circularity).

mod shape;
mod trace;

pub use shape::{BoundingBox, Contour};
pub use trace::find_contours;
