//! Lesion color analysis
//!
//! Converts the image to hue-saturation-value space and counts how many of
//! the clinically relevant color bands are present inside the lesion mask.

mod bands;
mod convert;
mod count;

pub use bands::{ColorBand, CATALOG};
pub use convert::{bgr_to_gray, bgr_to_hsv_pixel, hsv_in_range};
pub use count::{count_colors, ColorCount, ColorCountParams};
