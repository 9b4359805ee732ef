//! Mask border extraction

use dermafeat_core::{Grid, Mask, Result};

use crate::morphology::{erode, StructuringElement};

/// The outermost ring of lesion cells: mask minus its 4-connectivity
/// erosion by one. Cells beyond the grid count as background, so a lesion
/// touching the frame edge still contributes border cells there.
pub fn border_cells(mask: &Mask) -> Result<Grid<u8>> {
    let eroded = erode(mask, &StructuringElement::Cross(1))?;
    let (rows, cols) = mask.shape();

    Ok(Grid::from_fn(rows, cols, |r, c| {
        let inside = unsafe { mask.get_unchecked(r, c) } != 0;
        let kept = unsafe { eroded.get_unchecked(r, c) } != 0;
        if inside && !kept {
            255
        } else {
            0
        }
    }))
}
