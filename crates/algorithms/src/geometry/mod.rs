//! Mask geometry utilities
//!
//! Shared helpers over the binary lesion mask: area-weighted centroid,
//! border cell extraction, and the centered square frame the symmetry
//! analyzer folds in half.

mod border;
mod centroid;
mod frame;

pub use border::border_cells;
pub use centroid::center_of_mass;
pub use frame::symmetry_frame;
