//! 3-channel dermoscopic image type

use crate::error::{Error, Result};
use ndarray::Array3;

/// A 3-channel image with pixels in blue-green-red channel order.
///
/// Backed by an `Array3<u8>` of shape `(rows, cols, 3)`. Channel order
/// follows the decoded-capture convention of the upstream pipeline (BGR),
/// so `pixel(r, c)` returns `[b, g, r]`.
#[derive(Debug, Clone, PartialEq)]
pub struct BgrImage {
    data: Array3<u8>,
}

impl BgrImage {
    /// Create a black image of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, 3)),
        }
    }

    /// Create an image filled with one BGR color
    pub fn filled(rows: usize, cols: usize, bgr: [u8; 3]) -> Self {
        Self::from_fn(rows, cols, |_, _| bgr)
    }

    /// Create an image by evaluating a function at every (row, col)
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> [u8; 3]) -> Self {
        let mut data = Array3::zeros((rows, cols, 3));
        for r in 0..rows {
            for c in 0..cols {
                let px = f(r, c);
                data[(r, c, 0)] = px[0];
                data[(r, c, 1)] = px[1];
                data[(r, c, 2)] = px[2];
            }
        }
        Self { data }
    }

    /// Create an image from an ndarray of shape (rows, cols, 3)
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (rows, cols, channels) = data.dim();
        if channels != 3 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        Ok(Self { data })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        let (r, c, _) = self.data.dim();
        (r, c)
    }

    /// Whether the image has no pixels
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Get the [b, g, r] pixel at (row, col)
    pub fn pixel(&self, row: usize, col: usize) -> Result<[u8; 3]> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(unsafe { self.pixel_unchecked(row, col) })
    }

    /// Get the [b, g, r] pixel at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn pixel_unchecked(&self, row: usize, col: usize) -> [u8; 3] {
        unsafe {
            [
                *self.data.uget((row, col, 0)),
                *self.data.uget((row, col, 1)),
                *self.data.uget((row, col, 2)),
            ]
        }
    }

    /// Set the [b, g, r] pixel at (row, col)
    pub fn set_pixel(&mut self, row: usize, col: usize, bgr: [u8; 3]) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        unsafe { self.set_pixel_unchecked(row, col, bgr) };
        Ok(())
    }

    /// Set the [b, g, r] pixel at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn set_pixel_unchecked(&mut self, row: usize, col: usize, bgr: [u8; 3]) {
        unsafe {
            *self.data.uget_mut((row, col, 0)) = bgr[0];
            *self.data.uget_mut((row, col, 1)) = bgr[1];
            *self.data.uget_mut((row, col, 2)) = bgr[2];
        }
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }

    /// Consume the image and return the underlying array
    pub fn into_array(self) -> Array3<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_creation() {
        let img = BgrImage::new(10, 20);
        assert_eq!(img.shape(), (10, 20));
        assert_eq!(img.pixel(0, 0).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut img = BgrImage::new(5, 5);
        img.set_pixel(2, 3, [10, 20, 30]).unwrap();
        assert_eq!(img.pixel(2, 3).unwrap(), [10, 20, 30]);
        assert!(img.pixel(5, 0).is_err());
    }

    #[test]
    fn test_filled_channel_order() {
        let img = BgrImage::filled(2, 2, [1, 2, 3]);
        let px = img.pixel(1, 1).unwrap();
        assert_eq!(px[0], 1); // blue
        assert_eq!(px[2], 3); // red
    }

    #[test]
    fn test_from_array_channel_check() {
        let bad = Array3::<u8>::zeros((4, 4, 4));
        assert!(BgrImage::from_array(bad).is_err());
    }
}
