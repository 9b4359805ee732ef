//! Main Grid type

use crate::error::{Error, Result};
use crate::grid::GridElement;
use ndarray::{Array2, ArrayView2, ArrayViewMut2};

/// A 2D pixel-grid buffer.
///
/// `Grid<T>` stores values of type `T` in a 2D grid with row-major
/// `(row, col)` indexing. It is the backing type for lesion masks and
/// intermediate binary/channel images.
///
/// # Type Parameters
///
/// - `T`: The cell value type, must implement [`GridElement`]
///
/// # Example
///
/// ```
/// use dermafeat_core::Grid;
///
/// let mut grid: Grid<u8> = Grid::new(100, 100);
/// grid.set(10, 20, 255).unwrap();
/// assert_eq!(grid.get(10, 20).unwrap(), 255);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: GridElement> {
    /// Cell data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: GridElement> Grid<T> {
    /// Create a new grid filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new grid filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a grid from existing data in row-major order
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Create a grid by evaluating a function at every (row, col)
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        Self {
            data: Array2::from_shape_fn((rows, cols), |(r, c)| f(r, c)),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Set value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn set_unchecked(&mut self, row: usize, col: usize, value: T) {
        unsafe {
            *self.data.uget_mut((row, col)) = value;
        }
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a mutable view of the underlying data
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, T> {
        self.data.view_mut()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Get a mutable reference to the underlying array
    pub fn data_mut(&mut self) -> &mut Array2<T> {
        &mut self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    // Mask-oriented queries

    /// Count of nonzero cells (lesion area for a binary mask)
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|v| !v.is_zero()).count()
    }

    /// Resample to (rows, cols) with nearest-neighbor interpolation.
    ///
    /// Source cell for output (r, c) is `(floor(r * sr/dr), floor(c * sc/dc))`.
    /// Fails with [`Error::SizeMismatch`] when either grid is empty, since an
    /// empty buffer cannot be reconciled by resampling.
    pub fn resize_nearest(&self, rows: usize, cols: usize) -> Result<Self> {
        let (sr, sc) = self.shape();
        if sr == 0 || sc == 0 || rows == 0 || cols == 0 {
            return Err(Error::SizeMismatch {
                er: rows,
                ec: cols,
                ar: sr,
                ac: sc,
            });
        }
        if (sr, sc) == (rows, cols) {
            return Ok(self.clone());
        }

        let row_scale = sr as f64 / rows as f64;
        let col_scale = sc as f64 / cols as f64;

        Ok(Self::from_fn(rows, cols, |r, c| {
            let src_r = ((r as f64 * row_scale) as usize).min(sr - 1);
            let src_c = ((c as f64 * col_scale) as usize).min(sc - 1);
            unsafe { self.get_unchecked(src_r, src_c) }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid: Grid<u8> = Grid::new(100, 200);
        assert_eq!(grid.rows(), 100);
        assert_eq!(grid.cols(), 200);
        assert_eq!(grid.shape(), (100, 200));
    }

    #[test]
    fn test_grid_access() {
        let mut grid: Grid<u8> = Grid::new(10, 10);
        grid.set(5, 5, 42).unwrap();
        assert_eq!(grid.get(5, 5).unwrap(), 42);
        assert!(grid.get(10, 0).is_err());
        assert!(grid.set(0, 10, 1).is_err());
    }

    #[test]
    fn test_from_vec_shape_check() {
        assert!(Grid::<u8>::from_vec(vec![1, 2, 3], 2, 2).is_err());
        let grid = Grid::<u8>::from_vec(vec![1, 2, 3, 4], 2, 2).unwrap();
        assert_eq!(grid.get(1, 0).unwrap(), 3);
    }

    #[test]
    fn test_count_nonzero() {
        let mut grid: Grid<u8> = Grid::new(4, 4);
        grid.set(0, 0, 255).unwrap();
        grid.set(3, 3, 1).unwrap();
        assert_eq!(grid.count_nonzero(), 2);
    }

    #[test]
    fn test_resize_nearest_upscale() {
        // 2x2 checkerboard doubled: each source cell becomes a 2x2 block
        let grid = Grid::<u8>::from_vec(vec![255, 0, 0, 255], 2, 2).unwrap();
        let up = grid.resize_nearest(4, 4).unwrap();
        assert_eq!(up.get(0, 0).unwrap(), 255);
        assert_eq!(up.get(1, 1).unwrap(), 255);
        assert_eq!(up.get(0, 2).unwrap(), 0);
        assert_eq!(up.get(3, 3).unwrap(), 255);
    }

    #[test]
    fn test_resize_nearest_identity() {
        let grid = Grid::<u8>::from_fn(5, 7, |r, c| (r * 7 + c) as u8);
        let same = grid.resize_nearest(5, 7).unwrap();
        assert_eq!(same, grid);
    }

    #[test]
    fn test_resize_nearest_empty_fails() {
        let grid: Grid<u8> = Grid::new(0, 0);
        assert!(grid.resize_nearest(4, 4).is_err());
        let grid: Grid<u8> = Grid::new(4, 4);
        assert!(grid.resize_nearest(0, 4).is_err());
    }
}
