//! Square symmetry frame construction

use dermafeat_core::{Grid, Mask, Result};

use super::border::border_cells;
use super::centroid::center_of_mass;
use crate::thresholds::FRAME_MARGIN;

/// Square 0/1 crop of the mask, centered on its centroid, sized to cover
/// the whole lesion.
///
/// The half-side is the largest centroid-to-border-cell distance plus a
/// fixed margin. Both the centroid coordinates and the per-cell distances
/// are truncated to integers, not rounded, before taking the maximum,
/// which can change the frame size by one pixel for borderline distances.
/// Regions of the frame that fall outside the mask grid are
/// zero-filled, which keeps the centroid exactly centered, and the side
/// length `2 * half` is even by construction so the frame splits cleanly
/// along both axes.
///
/// Propagates [`DegenerateMask`] from the centroid for a zero-area mask.
///
/// [`DegenerateMask`]: dermafeat_core::Error::DegenerateMask
pub fn symmetry_frame(mask: &Mask) -> Result<Grid<u8>> {
    let com = center_of_mass(mask)?;
    let (com_r, com_c) = (com.0 as isize, com.1 as isize);

    let border = border_cells(mask)?;
    let (rows, cols) = mask.shape();

    let mut max_dist = 0usize;
    for r in 0..rows {
        for c in 0..cols {
            if unsafe { border.get_unchecked(r, c) } == 0 {
                continue;
            }
            let dr = (r as isize - com_r) as f64;
            let dc = (c as isize - com_c) as f64;
            let dist = (dr * dr + dc * dc).sqrt() as usize;
            max_dist = max_dist.max(dist);
        }
    }

    let half = (max_dist + FRAME_MARGIN) as isize;
    let side = (2 * half) as usize;
    debug_assert_eq!(side % 2, 0);

    Ok(Grid::from_fn(side, side, |r, c| {
        let src_r = com_r - half + r as isize;
        let src_c = com_c - half + c as isize;
        if src_r < 0 || src_c < 0 || src_r >= rows as isize || src_c >= cols as isize {
            return 0;
        }
        u8::from(unsafe { mask.get_unchecked(src_r as usize, src_c as usize) } != 0)
    }))
}
