//! Mask center of mass

use dermafeat_core::{Error, Mask, Result};

/// Area-weighted centroid (row, col) of the mask's nonzero cells.
///
/// Every nonzero cell weighs the same regardless of its stored value, so a
/// 0/1 and a 0/255 mask give identical centroids.
///
/// Fails with [`Error::DegenerateMask`] on a zero-area mask: the centroid
/// of nothing is undefined and must never be silently reported as (0, 0).
pub fn center_of_mass(mask: &Mask) -> Result<(f64, f64)> {
    let (rows, cols) = mask.shape();
    let mut count = 0u64;
    let mut sum_r = 0u64;
    let mut sum_c = 0u64;

    for r in 0..rows {
        for c in 0..cols {
            if unsafe { mask.get_unchecked(r, c) } != 0 {
                count += 1;
                sum_r += r as u64;
                sum_c += c as u64;
            }
        }
    }

    if count == 0 {
        return Err(Error::DegenerateMask);
    }

    Ok((sum_r as f64 / count as f64, sum_c as f64 / count as f64))
}
