//! Grid data structures for pixel buffers

mod buffer;
mod element;

pub use buffer::Grid;
pub use element::GridElement;
