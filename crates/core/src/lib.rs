//! # DermaFeat Core
//!
//! Core types for the DermaFeat dermoscopic feature-extraction library.
//!
//! This crate provides:
//! - `Grid<T>`: generic 2D cell buffer (masks, binary images, channel planes)
//! - `BgrImage`: 3-channel dermoscopic image in blue-green-red order
//! - `FeatureVector`: the fixed-order diagnostic feature record
//! - `Error`/`Result`: shared error types for all analyzers
//! - The `Algorithm` trait for a consistent analyzer API

pub mod error;
pub mod features;
pub mod grid;
pub mod image;

pub use error::{Error, Result};
pub use features::{FeatureVector, FEATURE_NAMES};
pub use grid::{Grid, GridElement};
pub use image::BgrImage;

/// Binary lesion mask: 0 = background, nonzero = lesion.
pub type Mask = Grid<u8>;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::features::{FeatureVector, FEATURE_NAMES};
    pub use crate::grid::{Grid, GridElement};
    pub use crate::image::BgrImage;
    pub use crate::{Algorithm, Mask};
}

/// Core trait for all analyzers in DermaFeat.
///
/// Analyzers are pure functions that transform input data according to
/// parameters; repeated execution on the same input is bit-identical.
pub trait Algorithm {
    /// Input type for the analyzer
    type Input;
    /// Output type for the analyzer
    type Output;
    /// Parameters controlling analyzer behavior
    type Params: Default;
    /// Error type for analyzer execution
    type Error: std::error::Error;

    /// Returns the analyzer name
    fn name(&self) -> &'static str;

    /// Returns a description of what the analyzer computes
    fn description(&self) -> &'static str;

    /// Execute the analyzer
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
